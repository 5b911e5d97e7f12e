//! Seeded RNG for mission generation. Reset draws from the same stream,
//! so consecutive missions differ while the whole session is
//! reproducible from one seed.

pub use rand_chacha::ChaCha8Rng as SeededRng;

pub fn new_rng(seed: u32) -> SeededRng {
    rand_seeder::Seeder::from(seed).make_rng()
}
