use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{StoreError, StoreResult};
use crate::prompt::{DIFFICULTY_RANGE, Prompt, PromptDraft, PromptId};

/// The serialized repository state: one pool per category.
///
/// The JSON shape of this struct is the on-disk store format:
/// `{"truths": [...], "dares": [...]}`. Missing fields load as empty
/// pools and unknown fields are ignored, so older or hand-edited files
/// remain readable. There is no version field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPools {
    /// The truth pool.
    #[serde(default)]
    pub truths: Vec<Prompt>,
    /// The dare pool.
    #[serde(default)]
    pub dares: Vec<Prompt>,
}

impl PromptPools {
    /// Borrow the pool for a category.
    pub fn pool(&self, category: Category) -> &[Prompt] {
        match category {
            Category::Truths => &self.truths,
            Category::Dares => &self.dares,
        }
    }

    fn pool_mut(&mut self, category: Category) -> &mut Vec<Prompt> {
        match category {
            Category::Truths => &mut self.truths,
            Category::Dares => &mut self.dares,
        }
    }

    /// Total number of prompts across both pools.
    pub fn len(&self) -> usize {
        self.truths.len() + self.dares.len()
    }

    /// Whether both pools are empty.
    pub fn is_empty(&self) -> bool {
        self.truths.is_empty() && self.dares.is_empty()
    }
}

/// The central prompt store. Owns the pools; all mutations pass through it.
///
/// Ids come from a monotonically increasing counter derived from the
/// highest id already present, so they stay unique within each category
/// and within any bulk batch.
#[derive(Debug, Clone)]
pub struct PromptStore {
    pools: PromptPools,
    next_id: i64,
}

impl PromptStore {
    /// Create a store over existing pools.
    pub fn new(pools: PromptPools) -> Self {
        let max_id = pools
            .truths
            .iter()
            .chain(&pools.dares)
            .map(|p| p.id.0)
            .max()
            .unwrap_or(0);
        Self {
            pools,
            next_id: max_id + 1,
        }
    }

    /// Borrow the underlying pools (for persistence).
    pub fn pools(&self) -> &PromptPools {
        &self.pools
    }

    fn fresh_id(&mut self) -> PromptId {
        let id = PromptId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Validate a (text, difficulty) pair, returning the trimmed text.
    fn validate(text: &str, difficulty: u8) -> StoreResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyText);
        }
        if !DIFFICULTY_RANGE.contains(&difficulty) {
            return Err(StoreError::DifficultyOutOfRange(difficulty));
        }
        Ok(trimmed.to_string())
    }

    /// Validate and append a new prompt. Returns the stored prompt.
    pub fn add(&mut self, category: Category, text: &str, difficulty: u8) -> StoreResult<Prompt> {
        let text = Self::validate(text, difficulty)?;
        let prompt = Prompt {
            id: self.fresh_id(),
            text,
            difficulty,
        };
        self.pools.pool_mut(category).push(prompt.clone());
        Ok(prompt)
    }

    /// Replace a prompt's text and difficulty in place. The id is unchanged.
    pub fn update(
        &mut self,
        category: Category,
        id: PromptId,
        text: &str,
        difficulty: u8,
    ) -> StoreResult<Prompt> {
        let text = Self::validate(text, difficulty)?;
        let prompt = self
            .pools
            .pool_mut(category)
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PromptNotFound { category, id })?;
        prompt.text = text;
        prompt.difficulty = difficulty;
        Ok(prompt.clone())
    }

    /// Remove a prompt if present. Returns whether anything was removed;
    /// removing a missing id is a no-op, not an error.
    pub fn remove(&mut self, category: Category, id: PromptId) -> bool {
        let pool = self.pools.pool_mut(category);
        let before = pool.len();
        pool.retain(|p| p.id != id);
        pool.len() != before
    }

    /// Wholesale-replace a category's pool with a batch of drafts.
    ///
    /// The whole batch is validated before anything changes: one invalid
    /// record rejects the batch and leaves the existing pool untouched.
    /// Every accepted record gets a fresh id; incoming ids are ignored.
    pub fn replace_all(&mut self, category: Category, drafts: &[PromptDraft]) -> StoreResult<()> {
        let mut validated = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.iter().enumerate() {
            let text =
                Self::validate(&draft.text, draft.difficulty).map_err(|e| {
                    StoreError::InvalidBatchRecord {
                        index,
                        source: Box::new(e),
                    }
                })?;
            validated.push((text, draft.difficulty));
        }

        let mut prompts = Vec::with_capacity(validated.len());
        for (text, difficulty) in validated {
            prompts.push(Prompt {
                id: self.fresh_id(),
                text,
                difficulty,
            });
        }
        *self.pools.pool_mut(category) = prompts;
        Ok(())
    }

    /// A defensive copy of a category's pool, sorted by ascending
    /// difficulty. The sort is stable, so prompts of equal difficulty
    /// keep their insertion order.
    pub fn list(&self, category: Category) -> Vec<Prompt> {
        let mut prompts = self.pools.pool(category).to_vec();
        prompts.sort_by_key(|p| p.difficulty);
        prompts
    }

    /// All prompts in a category at exactly the given difficulty.
    /// An empty result is not an error.
    pub fn at_difficulty(&self, category: Category, difficulty: u8) -> Vec<&Prompt> {
        self.pools
            .pool(category)
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Find one prompt by id.
    pub fn get(&self, category: Category, id: PromptId) -> Option<&Prompt> {
        self.pools.pool(category).iter().find(|p| p.id == id)
    }
}

impl Default for PromptStore {
    fn default() -> Self {
        Self::new(PromptPools::default())
    }
}
