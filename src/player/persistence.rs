//! Durable storage for player state.
//!
//! The engine never calls this; the caller saves after a pull and treats the
//! pull as committed only once `save` returns `Ok`.

use super::state::PlayerState;
use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::error::SaveError;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Saves and loads one player's state as a checksummed binary file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Save location for `player_id` under the platform config directory.
    pub fn new(player_id: &str) -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "gacha").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let players_dir = project_dirs.config_dir().join("players");
        fs::create_dir_all(&players_dir)?;

        Ok(Self {
            save_path: players_dir.join(format!("{player_id}.dat")),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized player state (variable length)
    /// - SHA256 checksum over the three fields above (32 bytes)
    pub fn save(&self, state: &PlayerState) -> Result<(), SaveError> {
        let data = bincode::serialize(state)?;
        let data_len = u32::try_from(data.len()).map_err(|_| {
            SaveError::Serialization(format!("player state too large: {} bytes", data.len()))
        })?;

        let checksum = checksum(&SAVE_VERSION_MAGIC.to_le_bytes(), &data_len.to_le_bytes(), &data);

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target then rename, so a crash never leaves half a file
        let tmp_path = self.save_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
            file.write_all(&data_len.to_le_bytes())?;
            file.write_all(&data)?;
            file.write_all(&checksum)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.save_path)?;

        debug!(path = %self.save_path.display(), bytes = data.len(), "saved player state");
        Ok(())
    }

    pub fn load(&self) -> Result<PlayerState, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::UnsupportedVersion(version));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let expected_len = HEADER_LEN + data_len as u64 + CHECKSUM_LEN;
        let file_len = file.metadata()?.len();
        if file_len != expected_len {
            warn!(path = %self.save_path.display(), file_len, expected_len, "save file length mismatch");
            return Err(SaveError::Serialization(format!(
                "save file is {file_len} bytes, header claims {expected_len}"
            )));
        }

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        if stored_checksum != checksum(&version_bytes, &length_bytes, &data) {
            warn!(path = %self.save_path.display(), "save file checksum mismatch");
            return Err(SaveError::ChecksumMismatch);
        }

        check_equipped(bincode::deserialize(&data)?)
    }

    /// Load, or start fresh when no save exists yet.
    pub fn load_or_default(&self) -> Result<PlayerState, SaveError> {
        if !self.save_exists() {
            debug!(path = %self.save_path.display(), "no save file, starting fresh");
            return Ok(PlayerState::new());
        }
        self.load()
    }
}

const HEADER_LEN: u64 = 8 + 4;
const CHECKSUM_LEN: u64 = 32;

fn checksum(version: &[u8], length: &[u8], data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(version);
    hasher.update(length);
    hasher.update(data);
    hasher.finalize().into()
}

/// Human-readable dump of a player's state.
pub fn export_json(state: &PlayerState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn import_json(json: &str) -> Result<PlayerState, SaveError> {
    check_equipped(serde_json::from_str(json)?)
}

fn check_equipped(state: PlayerState) -> Result<PlayerState, SaveError> {
    if let Some(id) = state.inventory.unowned_equip() {
        return Err(SaveError::InvalidState(format!(
            "equipped item {id} is not owned"
        )));
    }
    Ok(state)
}
