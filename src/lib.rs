#[macro_export]
macro_rules! error {
    ($msg:literal) => {
        $crate::Error::new(anyhow::anyhow!($msg))
    };
    ($msg:expr) => {
        $crate::Error::new(anyhow::anyhow!($msg))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::new(anyhow::anyhow!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr) => {
        if !$cond {
            return Err(error!(concat!("check failed: ", stringify!($cond))));
        }
    };
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err(error!($msg));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err(error!($fmt, $($arg)*));
        }
    };
}

/// Builds a [`Value::Map`] from `name => value` pairs, in the order written.
#[macro_export]
macro_rules! keywords {
    () => {
        $crate::Value::Map($crate::Keywords::new())
    };
    ($($name:ident => $value:expr),+ $(,)?) => {
        $crate::Value::Map($crate::Keywords::new()$(.with(stringify!($name), $value))+)
    };
}

mod argument;
mod curry;
mod database;
mod pretty;
mod registry;
mod signature;
mod value;

#[cfg(test)]
mod tests;

use derive_more::Display;
use std::error;
use std::fmt;
use std::rc::Rc;
use std::result;

#[derive(Clone, Display)]
#[display(fmt = "{}", "_0")]
pub struct Error(Rc<anyhow::Error>);

impl Error {
    pub fn new(error: anyhow::Error) -> Self {
        Self(Rc::new(error))
    }

    /// Recovers a typed error, such as [`ArgumentCountError`], that was converted into this one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl<E> From<E> for Error
where
    E: error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(anyhow::Error::new(error))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for Error {
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Error {}

pub type Result<T> = result::Result<T, Error>;

pub use argument::{Argument, ArgumentAccumulator, ArgumentCountError, UnknownKeywordError};
pub use curry::{Curry, FnTarget, Outcome, Target, TargetRef};
pub use database::Database;
pub use pretty::{PrettyExt, PrettyPrintArguments, PrettyPrintCurry};
pub use registry::{Registry, RegistryExt};
pub use signature::{ParamKind, Parameter, ParameterSignature};
pub use value::{Keywords, Name, Object, Value};
