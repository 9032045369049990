use crate::curry::{Curry, Target, TargetRef};
use crate::signature::ParameterSignature;
use crate::Result;
use im_rc::HashMap;

#[salsa::query_group(RegistryDatabase)]
pub trait Registry {
    #[salsa::input]
    fn targets(&self) -> HashMap<String, TargetRef>;

    fn target(&self, name: String) -> Result<TargetRef>;
    fn parameter_signature(&self, name: String) -> Result<ParameterSignature>;
}

fn target(db: &dyn Registry, name: String) -> Result<TargetRef> {
    db.targets().get(&name).cloned().ok_or_else(|| error!("undefined target {}", name))
}

fn parameter_signature(db: &dyn Registry, name: String) -> Result<ParameterSignature> {
    let target = db.target(name)?;
    Ok(target.signature())
}

pub trait RegistryExt: Registry {
    fn register<T: Target + 'static>(&mut self, target: T) -> TargetRef {
        let target = TargetRef::new(target);
        let mut targets = self.targets();
        tracing::debug!(target_name = target.name(), replaced = targets.contains_key(target.name()), "registering target");
        targets.insert(target.name().to_owned(), target.clone());
        self.set_targets(targets);
        target
    }

    fn curry(&self, name: &str) -> Result<Curry> {
        let target = self.target(name.to_owned())?;
        let signature = self.parameter_signature(name.to_owned())?;
        Ok(Curry::with_signature(target, signature))
    }
}

impl<T: Registry + ?Sized> RegistryExt for T {}
