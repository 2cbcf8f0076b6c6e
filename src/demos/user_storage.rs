//! # User Storage
//!
//! Writes a save file to per-user storage and reads it straight back.

use crate::app::{App, AppContext, AppResult};
use crate::config;
use crate::storage::UserStorage;
use crate::PrimerResult;
use macroquad::prelude::{clear_background, BLACK};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Name of the JSON file listing the written save slots.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// One entry of the save manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSlot {
    pub file: String,
    pub size: u64,
}

/// What the walkthrough read back.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveContents {
    /// The file holds this text
    Text(String),
    /// The file exists but is empty
    Empty,
}

/// Writes `payload` to `file` and records it in the manifest.
pub fn write_user_data(storage: &UserStorage, file: &str, payload: &[u8]) -> PrimerResult<()> {
    storage.write_file(file, payload)?;
    storage.write_json(
        MANIFEST_FILE_NAME,
        &vec![SaveSlot {
            file: file.to_string(),
            size: payload.len() as u64,
        }],
    )?;
    Ok(())
}

/// Reads `file` back.
pub fn read_user_data(storage: &UserStorage, file: &str) -> PrimerResult<SaveContents> {
    if storage.file_size(file)? == 0 {
        return Ok(SaveContents::Empty);
    }
    let data = storage.read_file(file)?;
    Ok(SaveContents::Text(String::from_utf8_lossy(&data).into_owned()))
}

/// Per-user storage round trip.
pub struct UserStorageDemo {
    /// What was read back during init
    pub contents: SaveContents,
}

impl UserStorageDemo {
    /// Performs the write and the read.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        let storage = UserStorage::open(config::STORAGE_ORG, config::STORAGE_APP)?;
        Self::with_storage(&storage)
    }

    /// Performs the write and the read against `storage`.
    pub fn with_storage(storage: &UserStorage) -> PrimerResult<Self> {
        write_user_data(storage, config::SAVE_FILE_NAME, config::SAVE_PAYLOAD.as_bytes())?;
        info!("Save data are written");

        let contents = read_user_data(storage, config::SAVE_FILE_NAME)?;
        match &contents {
            SaveContents::Text(text) => {
                info!("Save Data");
                info!("{}", text);
            }
            SaveContents::Empty => info!("No file content"),
        }

        let slots: Vec<SaveSlot> = storage.read_json(MANIFEST_FILE_NAME)?;
        info!("Manifest lists {} slot(s)", slots.len());

        Ok(Self { contents })
    }
}

impl App for UserStorageDemo {
    fn name(&self) -> &str {
        "user-storage"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(BLACK);
        Ok(AppResult::Continue)
    }
}
