use crate::Registry;

#[salsa::database(crate::registry::RegistryDatabase)]
pub struct Database {
    storage: salsa::Storage<Database>,
}

impl salsa::Database for Database {}

impl Default for Database {
    fn default() -> Self {
        let mut db = Self {
            storage: salsa::Storage::default(),
        };

        db.set_targets(im_rc::HashMap::new());
        db
    }
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}
