mod common;
mod intake;
mod requirements;
