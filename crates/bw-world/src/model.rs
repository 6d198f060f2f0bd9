use bw_core::{BlockId, BwError, Configuration, ErrorInfo};

use crate::grid::{table_position, GridPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockState {
    /// Zero-based index of the supporting block; `None` on the table.
    on: Option<usize>,
    clear: bool,
    stack: usize,
}

/// Abstract blocks world: which block is on which, and which table stack each
/// block belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocksWorld {
    blocks: Vec<BlockState>,
}

impl BlocksWorld {
    /// Creates a world with `size` blocks, all on the table. Block `n` starts
    /// on stack `n`.
    pub fn new(size: usize) -> Result<Self, BwError> {
        if size == 0 {
            return Err(BwError::Config(
                ErrorInfo::new("empty-world", "size must be positive")
                    .with_context("size", "0"),
            ));
        }
        Ok(Self {
            blocks: (0..size)
                .map(|idx| BlockState {
                    on: None,
                    clear: true,
                    stack: idx + 1,
                })
                .collect(),
        })
    }

    /// Creates a world arranged as `config`.
    pub fn from_configuration(config: &Configuration) -> Result<Self, BwError> {
        let mut world = Self::new(config.len())?;
        world.reset(config)?;
        Ok(world)
    }

    /// Puts every block on the table, then stacks blocks as `config` says.
    ///
    /// Blocks are placed in passes: a block whose support is already in its
    /// final position is moved onto it. A pass that places nothing while blocks
    /// remain means the configuration contains a loop.
    pub fn reset(&mut self, config: &Configuration) -> Result<(), BwError> {
        *self = Self::new(config.len())?;
        tracing::debug!(blocks = config.len(), %config, "resetting world");

        let mut pending: Vec<usize> = config.as_slice().to_vec();
        loop {
            let mut remaining = false;
            let mut moved = false;
            for idx in 0..pending.len() {
                let on = pending[idx];
                if on == 0 {
                    continue;
                }
                remaining = true;
                if pending[on - 1] == 0 {
                    self.move_index(idx, Some(on - 1))?;
                    pending[idx] = 0;
                    moved = true;
                }
            }
            if !remaining {
                return Ok(());
            }
            if !moved {
                let stuck: Vec<String> = pending
                    .iter()
                    .enumerate()
                    .filter(|&(_, &on)| on > 0)
                    .map(|(idx, _)| (idx + 1).to_string())
                    .collect();
                return Err(BwError::World(
                    ErrorInfo::new(
                        "cycle",
                        "failed to place blocks in initial position, there must be a loop",
                    )
                    .with_context("blocks", stuck.join(",")),
                ));
            }
        }
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`: a world holds at least one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over all block identifiers.
    pub fn block_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        (0..self.blocks.len()).map(BlockId::from_index)
    }

    /// What `block` rests on; `None` for the table.
    pub fn on(&self, block: BlockId) -> Result<Option<BlockId>, BwError> {
        Ok(self.state(block)?.on.map(BlockId::from_index))
    }

    /// Whether nothing rests on `block`.
    pub fn is_clear(&self, block: BlockId) -> Result<bool, BwError> {
        Ok(self.state(block)?.clear)
    }

    /// Table stack `block` belongs to.
    pub fn stack_number(&self, block: BlockId) -> Result<usize, BwError> {
        Ok(self.state(block)?.stack)
    }

    /// Grid position of the stack holding `block`.
    pub fn position(&self, block: BlockId) -> Result<GridPosition, BwError> {
        Ok(table_position(self.state(block)?.stack))
    }

    /// First unused stack, or one past the last block if all are taken.
    pub fn free_stack_number(&self) -> usize {
        let size = self.blocks.len();
        let mut free = vec![true; size + 1];
        for state in &self.blocks {
            if let Some(slot) = free.get_mut(state.stack) {
                *slot = false;
            }
        }
        free.iter().take(size).position(|&f| f).unwrap_or(size)
    }

    /// Moves `source` onto `dest`, or onto a free table stack when `dest` is `None`.
    pub fn move_block(&mut self, source: BlockId, dest: Option<BlockId>) -> Result<(), BwError> {
        self.state(source)?;
        let dest = match dest {
            Some(block) => {
                self.state(block)?;
                Some(block.index())
            }
            None => None,
        };
        self.move_index(source.index(), dest)
    }

    /// Current arrangement in the community format.
    pub fn configuration(&self) -> Result<Configuration, BwError> {
        Configuration::new(
            self.blocks
                .iter()
                .map(|state| state.on.map_or(0, |idx| idx + 1))
                .collect(),
        )
    }

    /// Towers listed bottom to top, ordered by stack number.
    pub fn towers(&self) -> Vec<Vec<BlockId>> {
        let mut above = vec![None; self.blocks.len()];
        for (idx, state) in self.blocks.iter().enumerate() {
            if let Some(on) = state.on {
                above[on] = Some(idx);
            }
        }
        let mut bases: Vec<usize> = (0..self.blocks.len())
            .filter(|&idx| self.blocks[idx].on.is_none())
            .collect();
        bases.sort_by_key(|&idx| self.blocks[idx].stack);

        bases
            .into_iter()
            .map(|base| {
                let mut tower = vec![BlockId::from_index(base)];
                let mut current = base;
                while let Some(next) = above[current] {
                    tower.push(BlockId::from_index(next));
                    current = next;
                }
                tower
            })
            .collect()
    }

    fn state(&self, block: BlockId) -> Result<&BlockState, BwError> {
        self.blocks.get(block.index()).ok_or_else(|| {
            BwError::World(
                ErrorInfo::new("unknown-block", format!("there is no block {block}"))
                    .with_context("block", block.as_raw().to_string())
                    .with_context("size", self.blocks.len().to_string()),
            )
        })
    }

    fn move_index(&mut self, source: usize, dest: Option<usize>) -> Result<(), BwError> {
        if !self.blocks[source].clear {
            return Err(BwError::World(
                ErrorInfo::new("source-not-clear", "block is not on top")
                    .with_context("block", (source + 1).to_string()),
            ));
        }
        let stack = match dest {
            None => self.free_stack_number(),
            Some(target) if target == source => {
                return Err(BwError::World(
                    ErrorInfo::new("self-move", "a block cannot be put on itself")
                        .with_context("block", (source + 1).to_string()),
                ));
            }
            Some(target) => {
                if !self.blocks[target].clear {
                    return Err(BwError::World(
                        ErrorInfo::new("target-not-clear", "target is not on top")
                            .with_context("block", (source + 1).to_string())
                            .with_context("target", (target + 1).to_string()),
                    ));
                }
                self.blocks[target].stack
            }
        };

        if let Some(previous) = self.blocks[source].on {
            self.blocks[previous].clear = true;
        }
        if let Some(target) = dest {
            self.blocks[target].clear = false;
        }
        let moving = &mut self.blocks[source];
        moving.on = dest;
        moving.stack = stack;
        tracing::trace!(block = source + 1, on = ?dest.map(|idx| idx + 1), stack, "moved block");
        Ok(())
    }
}
