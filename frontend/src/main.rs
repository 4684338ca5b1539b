//! Entry point for the WASM application

pub fn main() {
    code_detector::start();
}
