mod is_path_exists;

pub use is_path_exists::is_path_exists;
