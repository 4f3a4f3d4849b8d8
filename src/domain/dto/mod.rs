//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다.
//!
//! ```text
//! dto/
//! ├── greetings/   ← GET /hello, GET /hello/{name}
//! └── users/       ← POST /users, PUT /users, PUT /users/modify
//! ```

pub mod greetings;
pub mod users;

pub use greetings::*;
pub use users::*;
