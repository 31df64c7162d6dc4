//! # Member Repository
//!
//! Persistence gateway for the member cache facade.
//!
//! ```text
//! MemberService
//!   ↓  Arc<dyn MemberRepository>  (gateway interface)
//! MySqlMemberRepository           (MySQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
