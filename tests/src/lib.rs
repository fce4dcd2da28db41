#![cfg(test)]

mod fakes;
mod scan;
