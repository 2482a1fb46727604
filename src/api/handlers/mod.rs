//! # HTTP Handlers
//!
//! هر handler یک async function هست که فقط ورودی رو از request درمیاره،
//! سرویس رو صدا میزنه و نتیجه رو به response تبدیل میکنه.

pub mod url;
pub mod health;
pub mod root;
