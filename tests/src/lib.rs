#![cfg(test)]
mod audit;
