// =====================================================================
// File: data/loader.rs
// Date: Oct. 16, 2026
//
// Description:
//   Loads real key sets from binary dataset files, such as the SOSD
//   benchmark sets. A file is a flat array of little-endian `u64` keys,
//   optionally preceded by an 8-byte little-endian element count
//   (the SOSD native layout).
//
// Notes:
//   * Keys are returned in file order; SOSD files are sorted, so a tree
//     built from them sees ascending inserts.
//   * Duplicate keys in a file collapse in the index (last write wins).
// =====================================================================
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{BenchError, Result};

const KEY_WIDTH: u64 = std::mem::size_of::<u64>() as u64;

/// Load up to `max_size` keys from a binary `u64` file (`0` loads all).
///
/// # Arguments
/// * `path`        - Dataset file.
/// * `max_size`    - Cap on the number of keys read, 0 for no cap.
/// * `sosd_header` - The file starts with an 8-byte element count.
///
/// # Errors
/// * `BenchError::Io` if the file cannot be opened or read.
/// * `BenchError::Dataset` if a header disagrees with the file size.
pub fn load_binary_file(path: &Path, max_size: usize, sosd_header: bool) -> Result<Vec<u64>> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let body_size = if sosd_header {
        if file_size < KEY_WIDTH {
            return Err(BenchError::Dataset(format!(
                "{} is too short for a count header ({} bytes)",
                path.display(),
                file_size
            )));
        }
        let declared = reader.read_u64::<LittleEndian>()?;
        let body_size = file_size - KEY_WIDTH;
        if declared != body_size / KEY_WIDTH {
            return Err(BenchError::Dataset(format!(
                "{} declares {} keys but holds {}",
                path.display(),
                declared,
                body_size / KEY_WIDTH
            )));
        }
        body_size
    } else {
        file_size
    };

    if body_size % KEY_WIDTH != 0 {
        warn!(
            "{} has {} trailing bytes that do not form a key; ignoring them",
            path.display(),
            body_size % KEY_WIDTH
        );
    }

    let mut num_elements = (body_size / KEY_WIDTH) as usize;
    if max_size > 0 && max_size < num_elements {
        debug!("capping {} at {} of {} keys", path.display(), max_size, num_elements);
        num_elements = max_size;
    }

    let mut raw = vec![0u8; num_elements * KEY_WIDTH as usize];
    reader.read_exact(&mut raw)?;
    let mut data = vec![0u64; num_elements];
    LittleEndian::read_u64_into(&raw, &mut data);

    info!("Loaded {} keys from {}", data.len(), path.display());
    Ok(data)
}

/// Draw `num_queries` keys uniformly (with replacement) from `data`.
///
/// Every query is a stored key, so a correct index answers all of them.
/// Empty `data` yields no queries.
pub fn sample_queries(data: &[u64], num_queries: usize, seed: u64) -> Vec<u64> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_queries)
        .map(|_| data[rng.gen_range(0..data.len())])
        .collect()
}
