mod options;

pub use self::options::Options;
pub(crate) use self::options::ZSTD_LEVEL;
