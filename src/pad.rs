use crate::config::{BlockSize, Filler, PadConfig};
use crate::rand::Rng32;

/// Number of filler bytes needed to bring `len` up to a multiple of `block_size`
pub fn padding_len(len: usize, block_size: BlockSize) -> usize {
    match len % block_size.get() {
        0 => 0,
        r => block_size.get() - r,
    }
}

impl Filler {
    /// Overwrite every byte of `tail` with filler
    pub fn fill(&self, tail: &mut [u8], mut rng: impl Rng32) {
        match *self {
            Filler::Fixed(b) => tail.fill(b),
            Filler::RandomLetter => tail.iter_mut().for_each(|b| *b = rng.gen_letter()),
        }
    }
}

/// Pad data out to the next block boundary, leaving aligned data untouched
pub fn pad(data: impl AsRef<[u8]>, config: &PadConfig, rng: impl Rng32) -> Vec<u8> {
    let data = data.as_ref();
    let mut out = Vec::with_capacity(data.len() + config.block_size.get());
    out.extend_from_slice(data);
    pad_into(&mut out, config, rng);
    out
}

/// Pad data out to the next block boundary, writing onto the end of a Vec
pub fn pad_into(data: &mut Vec<u8>, config: &PadConfig, rng: impl Rng32) {
    let need = padding_len(data.len(), config.block_size);
    log::trace!(
        "{} bytes need {need} filler bytes for block size {}",
        data.len(),
        config.block_size
    );
    if need == 0 {
        return;
    }

    let start = data.len();
    data.resize(start + need, 0);
    config.filler.fill(&mut data[start..], rng);
}
