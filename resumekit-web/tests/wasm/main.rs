#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod support;

mod globals_tests;
mod notify_tests;
mod password_tests;
mod profile_tests;
mod signup_tests;
mod theme_nav_tests;
