mod sweep;

pub(crate) use sweep::run_sweep;
