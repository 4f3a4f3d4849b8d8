//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 상태가 없는 싱글톤으로, `instance()`로 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{greetings::GreetingService, users::UserService};
//!
//! let message = GreetingService::instance().greet(Some("Bob"));
//! let response = UserService::instance().create_user(user);
//! ```

pub mod greetings;
pub mod users;
