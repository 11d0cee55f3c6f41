pub mod select_lang;

pub use select_lang::select_lang_middleware;
