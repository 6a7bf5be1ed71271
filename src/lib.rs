pub mod linked_list;
pub mod logger;
pub mod render;

#[cfg(test)]
mod tests;

pub use linked_list::{LinkedList, Node};
pub use render::Renderer;
