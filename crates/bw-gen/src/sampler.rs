use bw_core::{BwError, Configuration, ErrorInfo, RngHandle};

use crate::ratio::RatioTable;

/// A chain of blocks known to be stacked together during one sampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tower {
    /// Block currently exposed at the top of the chain.
    pub top: usize,
    /// Block at the foot of the chain.
    pub bottom: usize,
}

impl Tower {
    fn singleton(block: usize) -> Self {
        Self {
            top: block,
            bottom: block,
        }
    }
}

/// Bookkeeping for one sampling pass. `rooted` and `floating` are fixed
/// capacity; only the first `nrt` / `nft` entries are live.
#[derive(Debug, Clone)]
pub(crate) struct Sigma {
    supports: Vec<Option<usize>>,
    rooted: Vec<Tower>,
    floating: Vec<Tower>,
    nrt: usize,
    nft: usize,
}

impl Sigma {
    fn new(blocks: usize) -> Self {
        Self {
            supports: vec![None; blocks],
            rooted: vec![Tower::singleton(0); blocks],
            floating: (0..blocks).map(Tower::singleton).collect(),
            nrt: 0,
            nft: blocks,
        }
    }

    /// Number of towers that ended up on the table.
    pub fn rooted_towers(&self) -> usize {
        self.nrt
    }

    pub fn configuration(&self) -> Result<Configuration, BwError> {
        Configuration::new(
            self.supports
                .iter()
                .map(|support| support.map_or(0, |block| block + 1))
                .collect(),
        )
    }
}

/// Draws one uniformly random state.
///
/// Every block starts as its own floating tower. The last floating tower is
/// repeatedly put somewhere: on the table, which adds a rooted tower, or on top
/// of any other rooted or floating tower, all of which are equally likely. The
/// table's weight comes from the ratio table so that every complete state has
/// the same probability.
pub(crate) fn make_state(table: &RatioTable, rng: &mut RngHandle) -> Result<Sigma, BwError> {
    let mut sigma = Sigma::new(table.blocks());

    while sigma.nft > 0 {
        sigma.nft -= 1;
        let r = rng.next_unit();
        let choice = sigma.nft + sigma.nrt;
        let rat = table.ratio(sigma.nft, sigma.nrt);
        let p = rat / (rat + choice as f64);
        let moving = sigma.floating[sigma.nft];

        if r <= p {
            sigma.rooted[sigma.nrt] = moving;
            sigma.nrt += 1;
            continue;
        }

        // p is exactly 1 when choice is 0, so r > p cannot happen there.
        if choice == 0 {
            return Err(BwError::Sampler(
                ErrorInfo::new("degenerate-choice", "no destination tower for a stacking step")
                    .with_context("blocks", table.blocks().to_string())
                    .with_context("r", r.to_string())
                    .with_context("p", p.to_string()),
            ));
        }

        let slot = ((r - p) / ((1.0 - p) / choice as f64)).floor() as usize;
        let b = slot.min(choice - 1);
        let destination = if b < sigma.nrt {
            &mut sigma.rooted[b]
        } else {
            &mut sigma.floating[b - sigma.nrt]
        };
        sigma.supports[moving.bottom] = Some(destination.top);
        destination.top = moving.top;
    }

    Ok(sigma)
}
