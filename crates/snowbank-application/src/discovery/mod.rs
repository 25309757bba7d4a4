//! Discovery providers
//!
//! Implementations of the [`DiscoveryProvider`](snowbank_domain::DiscoveryProvider)
//! port.
//!
//! | Provider | Source of snowflakes |
//! |----------|----------------------|
//! | [`StaticTableDiscovery`] | Explicit table built at runtime |
//! | [`LinkedDiscovery`] | `SNOWFLAKES` distributed slice filled at link time |

pub mod linked;
pub mod static_table;

pub use linked::{LinkedDiscovery, SNOWFLAKES, SnowflakeRegistration};
pub use static_table::StaticTableDiscovery;
