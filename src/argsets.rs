use std::path::PathBuf;

pub struct ValidateArgs {
    pub config: PathBuf,
}

pub struct BuildArgs {
    pub config: PathBuf,
    pub output: Option<PathBuf>,
}
