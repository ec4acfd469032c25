#![allow(dead_code)]

pub mod file;
pub mod sandbox;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
