use crate::argument::ArgumentAccumulator;
use crate::pretty::PrettyPrintCurry;
use crate::signature::{Parameter, ParameterSignature};
use crate::value::Value;
use crate::Result;
use derive_more::TryInto;
use std::convert::TryInto;
use std::fmt;
use std::ops;
use std::rc::Rc;

/// Something that can be invoked once all of its required arguments are known.
pub trait Target {
    fn name(&self) -> &str;

    /// Declared parameters, positional ones in declaration order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Receives positional values followed by a keyword map when the signature has
    /// required keywords.
    fn invoke(&self, args: Vec<Value>) -> Result<Value>;
}

#[derive(Clone)]
pub struct TargetRef(Rc<dyn Target>);

impl TargetRef {
    pub fn new<T: Target + 'static>(target: T) -> Self {
        Self(Rc::new(target))
    }

    pub fn signature(&self) -> ParameterSignature {
        ParameterSignature::new(self.0.parameters())
    }
}

impl PartialEq for TargetRef {
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TargetRef {}

impl ops::Deref for TargetRef {
    type Target = dyn Target;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetRef({})", self.0.name())
    }
}

pub struct FnTarget<F> {
    name: String,
    parameters: Vec<Parameter>,
    f: F,
}

impl<F> FnTarget<F>
where
    F: Fn(Vec<Value>) -> Result<Value>,
{
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, f: F) -> Self {
        Self {
            name: name.into(),
            parameters,
            f,
        }
    }
}

impl<F> Target for FnTarget<F>
where
    F: Fn(Vec<Value>) -> Result<Value>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.parameters.clone()
    }

    fn invoke(&self, args: Vec<Value>) -> Result<Value> {
        (self.f)(args)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, TryInto)]
#[try_into(owned, ref)]
pub enum Outcome {
    Invoked(Value),
    Curried(Curry),
}

impl Outcome {
    pub fn is_invoked(&self) -> bool {
        matches!(self, Outcome::Invoked(_))
    }

    pub fn into_value(self) -> Result<Value> {
        self.try_into().map_err(|_| error!("expected the target to have been invoked"))
    }

    pub fn into_curry(self) -> Result<Curry> {
        self.try_into().map_err(|_| error!("expected arguments to still be outstanding"))
    }
}

/// A target together with the arguments supplied to it so far.
///
/// Calling a `Curry` never changes it. Either the call completes the arguments and
/// the target runs, or a new `Curry` holding the extended arguments comes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curry {
    target: TargetRef,
    arguments: ArgumentAccumulator,
}

impl Curry {
    pub fn new(target: TargetRef) -> Self {
        let signature = target.signature();
        Self::with_signature(target, signature)
    }

    pub fn with_signature(target: TargetRef, signature: ParameterSignature) -> Self {
        Self {
            target,
            arguments: ArgumentAccumulator::new(signature),
        }
    }

    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    pub fn arguments(&self) -> &ArgumentAccumulator {
        &self.arguments
    }

    pub fn call<I>(&self, values: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = Value>,
    {
        let arguments = self.arguments.merge(values)?;
        if arguments.is_fulfilled() {
            tracing::debug!(target_name = self.target.name(), "arguments fulfilled, invoking target");
            let value = self.target.invoke(arguments.to_invocation_args())?;
            return Ok(Outcome::Invoked(value));
        }

        tracing::trace!(
            target_name = self.target.name(),
            missing = arguments.missing().count(),
            "arguments outstanding"
        );

        Ok(Outcome::Curried(Self {
            target: self.target.clone(),
            arguments,
        }))
    }

    pub fn describe(&self) -> String {
        PrettyPrintCurry::new(self).to_string()
    }
}

impl fmt::Display for Curry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PrettyPrintCurry::new(self))
    }
}
