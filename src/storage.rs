use std::{
    fs::{self, DirBuilder},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{error::AppError, user::User};

/// Store directory created under the OS configuration directory
pub const STORE_DIR_NAME: &str = "use-git";
/// Store file inside the store directory
pub const STORE_FILE_NAME: &str = "config.json";
/// Mode for a freshly created store directory
#[cfg(unix)]
const STORE_DIR_MODE: u32 = 0o744;

/// Ordered list of stored users backed by `config.json`.
///
/// Insertion order is the order users are presented in and the index
/// [`UserStore::remove`] works with. Every mutation rewrites the whole file.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UserStore {
    #[serde(rename = "Users", default)]
    users: Vec<User>,
    #[serde(skip)]
    dir: PathBuf,
}

impl UserStore {
    /// Opens the store in the default location, `<config dir>/use-git`
    pub fn open() -> Result<Self, AppError> {
        let config_dir: PathBuf = dirs::config_dir().ok_or(AppError::ConfigDirNotFound)?;
        Self::open_in(config_dir.join(STORE_DIR_NAME))
    }

    /// Opens the store kept in `dir`, creating the directory when missing.
    ///
    /// A missing store file yields an empty store.
    pub fn open_in(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir: PathBuf = dir.into();
        if !dir.exists() {
            create_store_dir(&dir)?;
            info!("created store directory {}", dir.display());
        }

        let users: Vec<User> = load_users(&dir.join(STORE_FILE_NAME))?;
        debug!("loaded {} users from {}", users.len(), dir.display());
        Ok(Self { users, dir })
    }

    /// Stored users in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Full path of the store file
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILE_NAME)
    }

    /// Appends `user` and persists the store.
    ///
    /// Fails without touching memory or disk if the email is already taken.
    /// A failed save leaves the user appended in memory.
    pub fn add(&mut self, user: User) -> Result<(), AppError> {
        if self.users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::DuplicateUser { email: user.email });
        }

        info!("adding user {}", user.email);
        self.users.push(user);
        self.save()
    }

    /// Removes the user at `index`, shifting later users down, and persists the store
    pub fn remove(&mut self, index: usize) -> Result<User, AppError> {
        if index >= self.users.len() {
            return Err(AppError::Index { index, len: self.users.len() });
        }

        let removed: User = self.users.remove(index);
        info!("removed user {}", removed.email);
        self.save()?;
        Ok(removed)
    }

    /// Writes the whole store as tab-indented JSON.
    ///
    /// The content goes to a temporary file in the store directory which is
    /// then renamed over the store file.
    pub fn save(&self) -> Result<(), AppError> {
        let mut content: Vec<u8> = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut content, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut serializer)?;

        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(&content)?;
        temp_file.as_file().sync_all()?;

        let path: PathBuf = self.path();
        temp_file.persist(&path).map_err(|err| err.error)?;
        debug!("saved {} users to {}", self.users.len(), path.display());
        Ok(())
    }
}

fn create_store_dir(dir: &Path) -> Result<(), AppError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(STORE_DIR_MODE);
    }
    builder.create(dir)?;
    Ok(())
}

fn load_users(path: &Path) -> Result<Vec<User>, AppError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file_contents: String = fs::read_to_string(path)?;
    if file_contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let store: UserStore = serde_json::from_str(&file_contents).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(store.users)
}
