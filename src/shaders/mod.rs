pub mod textured;
