#![no_std]

pub mod batch_transfer_proxy;
