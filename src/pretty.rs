use crate::argument::ArgumentAccumulator;
use crate::curry::Curry;
use itertools::Itertools;
use std::fmt;

pub trait PrettyExt {
    fn pretty_print_arguments(&self) -> PrettyPrintArguments<'_>;
}

impl PrettyExt for ArgumentAccumulator {
    fn pretty_print_arguments(&self) -> PrettyPrintArguments<'_> {
        PrettyPrintArguments { arguments: self }
    }
}

impl PrettyExt for Curry {
    fn pretty_print_arguments(&self) -> PrettyPrintArguments<'_> {
        self.arguments().pretty_print_arguments()
    }
}

/// Every declared parameter in order, e.g. `a=1, b=, c:, d:`.
#[derive(Clone, Copy)]
pub struct PrettyPrintArguments<'a> {
    arguments: &'a ArgumentAccumulator,
}

impl<'a> fmt::Display for PrettyPrintArguments<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arguments.arguments().format(", "))
    }
}

/// `Curry<Name>(a=1, b=, c:, d:)`
pub struct PrettyPrintCurry<'a> {
    name: &'a str,
    arguments: PrettyPrintArguments<'a>,
}

impl<'a> PrettyPrintCurry<'a> {
    pub fn new(curry: &'a Curry) -> Self {
        Self {
            name: curry.target().name(),
            arguments: curry.pretty_print_arguments(),
        }
    }
}

impl<'a> fmt::Display for PrettyPrintCurry<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curry<{}>({})", self.name, self.arguments)
    }
}

impl fmt::Display for ArgumentAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_print_arguments())
    }
}
