// Application layer: wires adapters into services from configuration.

pub mod assembler;
