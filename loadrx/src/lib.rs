mod client_paging;
mod error;
mod executor;
mod pagination;
mod remote_paging;
mod request_state;
mod stream_ext;

pub use client_paging::*;
pub use error::*;
pub use executor::*;
pub use pagination::*;
pub use remote_paging::*;
pub use request_state::*;
pub use stream_ext::*;
