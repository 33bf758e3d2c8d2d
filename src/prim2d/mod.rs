pub mod scanline;
