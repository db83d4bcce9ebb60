/// Keys under which the tracker keeps its collections
pub struct StorageKeys;

impl StorageKeys {
    pub const PROJECTS: &'static str = "projects";
    pub const DEVELOPERS: &'static str = "developers";
}
