use crate::value::Name;
use im_rc::Vector;
use std::iter::FromIterator;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum ParamKind {
    Positional,
    RequiredKeyword,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Parameter {
    pub kind: ParamKind,
    pub name: Name,
}

impl Parameter {
    pub fn new(kind: ParamKind, name: impl Into<Name>) -> Self {
        Self { kind, name: name.into() }
    }

    pub fn positional(name: impl Into<Name>) -> Self {
        Self::new(ParamKind::Positional, name)
    }

    pub fn keyword(name: impl Into<Name>) -> Self {
        Self::new(ParamKind::RequiredKeyword, name)
    }

    pub fn is_positional(&self) -> bool {
        self.kind == ParamKind::Positional
    }
}

/// The fixed inputs of a target: positional parameters in declaration order,
/// followed by the keyword parameters it requires.
///
/// Every positional parameter is required, so the arity is simply the number of
/// positional parameters. Keywords are matched by name; their declaration order
/// is kept only for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSignature {
    positional: Vector<Parameter>,
    required_keywords: Vector<Parameter>,
}

impl ParameterSignature {
    pub fn new<I: IntoIterator<Item = Parameter>>(parameters: I) -> Self {
        let (positional, required_keywords) = parameters.into_iter().partition(Parameter::is_positional);
        Self {
            positional,
            required_keywords,
        }
    }

    pub fn arity(&self) -> usize {
        self.positional.len()
    }

    pub fn positional(&self) -> &Vector<Parameter> {
        &self.positional
    }

    pub fn required_keywords(&self) -> &Vector<Parameter> {
        &self.required_keywords
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.positional.iter().chain(self.required_keywords.iter())
    }

    pub fn is_required_keyword(&self, name: &str) -> bool {
        self.required_keywords.iter().any(|parameter| parameter.name.as_str() == name)
    }
}

impl<N: Into<Name>> FromIterator<(ParamKind, N)> for ParameterSignature {
    fn from_iter<I: IntoIterator<Item = (ParamKind, N)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(kind, name)| Parameter::new(kind, name)))
    }
}
