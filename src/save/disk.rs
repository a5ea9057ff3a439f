use crate::Error;
use std::path::Path;
use std::path::PathBuf;

/// for types that are expensive to build from scratch
/// and cheap to write to and read back from disk.
///
/// files use the postgres binary copy layout: a fixed header,
/// one row per record (field count, then length-prefixed big-endian
/// fields), and a 0xFFFF trailer.
pub trait Disk: Sized {
    /// Returns the name of the entity. doubles as the file stem
    fn name() -> &'static str;
    /// build from scratch
    fn grow() -> Result<Self, Error>;
    /// read from disk
    fn load(path: &Path) -> Result<Self, Error>;
    /// write to disk
    fn save(&self, path: &Path) -> Result<(), Error>;
    /// default location on disk. `HANDRANK_TABLE` overrides it
    fn path() -> PathBuf {
        std::env::var_os("HANDRANK_TABLE")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::current_dir()
                    .unwrap_or_default()
                    .join("pgcopy")
                    .join(format!("{}.pgcopy", Self::name()))
            })
    }
    /// check if file exists on disk
    fn done(path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
    /// load if present, otherwise grow and save
    fn initialize(path: &Path) -> Result<Self, Error> {
        if Self::done(path) {
            log::info!("{:<32}{}", format!("loading {}", Self::name()), path.display());
            Self::load(path)
        } else {
            log::info!("{:<32}{}", format!("growing {}", Self::name()), path.display());
            let this = Self::grow()?;
            this.save(path)?;
            Ok(this)
        }
    }
    /// Postgres signature header + 8 null bytes for flags and extension
    /// header for binary copy: https://www.postgresql.org/docs/current/static/sql-copy.html
    fn header() -> &'static [u8] {
        b"PGCOPY\n\xFF\r\n\0\0\0\0\0\0\0\0\0"
    }
    /// Postgres signature footer to signal end of binary file
    fn footer() -> u16 {
        0xFFFF
    }
}
