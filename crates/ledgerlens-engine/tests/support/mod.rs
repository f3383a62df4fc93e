#![allow(dead_code)]

pub mod statement_testkit;
