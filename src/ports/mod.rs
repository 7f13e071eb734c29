//! Ports: trait seams between the model layer and external collaborators.

pub mod solver;
