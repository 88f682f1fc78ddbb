use pool_interface::types::error::Error as PoolError;
use soroban_sdk::{log, Env, Symbol};

/// Failed read of the pool
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReadError {
    /// Pool rejected the call with its own error code
    Pool(PoolError),
    /// Call aborted in the host or returned a value of another type
    Host,
}

impl ReadError {
    pub fn log(&self, env: &Env, read: Symbol) {
        match self {
            ReadError::Pool(err) => {
                log!(env, "pool read failed", read, *err as u32);
            }
            ReadError::Host => {
                log!(env, "pool call aborted", read);
            }
        }
    }
}
