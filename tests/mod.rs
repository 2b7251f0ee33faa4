// disable miri tests as Command is not supported yet
// See: https://github.com/rust-lang/miri/issues/2057
#[cfg(not(miri))]
mod common;

#[cfg(all(not(miri), target_family = "unix"))]
mod kill;
