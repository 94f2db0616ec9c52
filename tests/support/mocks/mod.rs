//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_store;
pub mod generation;
pub mod time;

pub use article_store::InMemoryArticleStore;
pub use generation::ScriptedGenerator;
pub use time::fixed_now;
