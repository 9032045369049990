use crate::signature::{Parameter, ParameterSignature};
use crate::value::{Keywords, Name, Value};
use crate::Result;
use derive_more::Display;
use im_rc::Vector;
use itertools::Itertools;
use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[display(fmt = "wrong number of arguments ({} for {})", given, arity)]
pub struct ArgumentCountError {
    pub given: usize,
    pub arity: usize,
}

impl error::Error for ArgumentCountError {}

#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[display(fmt = "unknown keyword{}: {}", "plural_suffix(names)", "names.iter().format(\", \")")]
pub struct UnknownKeywordError {
    pub names: Vec<String>,
}

impl error::Error for UnknownKeywordError {}

fn plural_suffix(names: &[String]) -> &'static str {
    if names.len() > 1 {
        "s"
    } else {
        ""
    }
}

/// One parameter slot, either holding a supplied value or still waiting for one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    parameter: Parameter,
    value: Option<Value>,
}

impl Argument {
    pub fn new(parameter: Parameter, value: Option<Value>) -> Self {
        Self { parameter, value }
    }

    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    pub fn name(&self) -> &Name {
        &self.parameter.name
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_fulfilled(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.parameter.is_positional() { '=' } else { ':' };
        write!(f, "{}{}", self.parameter.name, separator)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }

        Ok(())
    }
}

/// Arguments supplied so far, aligned slot for slot with a [`ParameterSignature`].
///
/// An accumulator is never modified once built: [`merge`](Self::merge) returns a
/// new accumulator, so earlier snapshots can be kept and merged again along a
/// different path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentAccumulator {
    signature: ParameterSignature,
    positional: Vector<Argument>,
    keyword: Vector<Argument>,
}

impl ArgumentAccumulator {
    /// An accumulator with every slot unfulfilled.
    pub fn new(signature: ParameterSignature) -> Self {
        let positional = signature.positional().iter().map(|parameter| Argument::new(parameter.clone(), None)).collect();
        let keyword = signature.required_keywords().iter().map(|parameter| Argument::new(parameter.clone(), None)).collect();
        Self {
            signature,
            positional,
            keyword,
        }
    }

    /// Matches raw values against `signature`.
    ///
    /// The first `arity` values fill the positional slots. Anything after them must
    /// be a keyword map; several trailing maps are merged left to right. A trailing
    /// value that is not a map counts towards the positional total, which is then
    /// reported as too many arguments.
    pub fn create<I>(signature: ParameterSignature, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut positional_values = values.into_iter().collect::<Vector<_>>();
        let given = positional_values.len();
        let arity = signature.arity();
        let trailing = if given > arity { positional_values.split_off(arity) } else { Vector::new() };

        let mut keywords = Keywords::new();
        for value in trailing {
            match value {
                Value::Map(map) => keywords.merge(map),
                _ => return Err(ArgumentCountError { given, arity }.into()),
            }
        }

        let unknown = keywords
            .names()
            .filter(|name| !signature.is_required_keyword(name))
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        if !unknown.is_empty() {
            return Err(UnknownKeywordError { names: unknown }.into());
        }

        let positional = signature
            .positional()
            .iter()
            .enumerate()
            .map(|(index, parameter)| Argument::new(parameter.clone(), positional_values.get(index).cloned()))
            .collect();

        let keyword = signature
            .required_keywords()
            .iter()
            .map(|parameter| Argument::new(parameter.clone(), keywords.get(&parameter.name).cloned()))
            .collect();

        Ok(Self {
            signature,
            positional,
            keyword,
        })
    }

    pub fn signature(&self) -> &ParameterSignature {
        &self.signature
    }

    pub fn positional(&self) -> &Vector<Argument> {
        &self.positional
    }

    pub fn keyword(&self) -> &Vector<Argument> {
        &self.keyword
    }

    pub fn arguments(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.positional.iter().chain(self.keyword.iter())
    }

    pub fn missing(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.arguments().filter(|argument| !argument.is_fulfilled()).map(Argument::parameter)
    }

    pub fn is_fulfilled(&self) -> bool {
        self.arguments().all(Argument::is_fulfilled)
    }

    /// Adds `values` after everything supplied so far and validates the whole
    /// sequence again, so counts in errors are cumulative across merges.
    pub fn merge<I>(&self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut combined = self.raw_values();
        combined.extend(values);
        tracing::trace!(given = combined.len(), arity = self.signature.arity(), "merging arguments");
        Self::create(self.signature.clone(), combined)
    }

    /// Fulfilled positional values, then one keyword map when any keyword is fulfilled.
    pub fn raw_values(&self) -> Vector<Value> {
        let mut values = self.positional.iter().filter_map(|argument| argument.value().cloned()).collect::<Vector<_>>();
        let keywords = self
            .keyword
            .iter()
            .filter_map(|argument| argument.value().map(|value| (argument.name().clone(), value.clone())))
            .collect::<Keywords>();

        if !keywords.is_empty() {
            values.push_back(Value::Map(keywords));
        }

        values
    }

    pub fn to_invocation_args(&self) -> Vec<Value> {
        self.raw_values().into_iter().collect()
    }
}
