//! Canonical syllable inventory.
//!
//! The inventory is the ground truth consulted by the combination builder:
//! a (lead, follow) pair only receives a code if the inventory accepts it.
//! It can be built from the embedded reference table, from an explicit pair
//! list, or derived from a character dictionary.

use ahash::AHashMap;
use tracing::debug;

use crate::dictionary::CharacterDict;
use crate::syllable::Syllable;

/// Reference pronunciation table: one line per lead, followed by every
/// syllable occurring with that lead.
pub const RAW_SYLLABLE_TABLE: &str = "\
b  ba bo bai bei bao ban ben bang beng bi bie biao bian bin bing
p  pa po pai pao pou pan pen pang peng pi pie piao pian pin ping
m  ma mo me mai mao mou man men mang meng mi mie miao miu mian min ming
f  fa fo fei fou fan fen fang feng
d  da de dai dei dao dou dan dang deng di die diao diu dian ding
t ta te tai tao tou tan tang teng ti tie tiao tian ting
n  na nai nei nao no nen nang neng ni nie niao niu nian nin niang ning
l  la le lai lei lao lou lan lang leng li lia lie liao liu lian lin liang ling
g  ga ge gai gei gao gou gan gen gang geng
k  ka ke kai kou kan ken kang keng
h ha he hai hei hao hou hen hang heng
j  ji jia jie jiao jiu jian jin jiang jing
q qi qia qie qiao qiu qian qin qiang qing
x  xi xia xie xiao xiu xian xin xiang xing
zh zha zhe zhi zhai zhao zhou zhan zhen zhang zheng
ch cha che chi chai chou chan chen chang cheng
sh sha she shi shai shao shou shan shen shang sheng
r re ri rao rou ran ren rang reng
z  za ze zi zai zao zou zang zeng
c  ca ce ci cai cao cou can cen cang ceng
s sa se si sai sao sou san sen sang seng
y  ya yao you yan yang yu ye yue yuan yi yin yun ying
w  wa wo wai wei wan wen wang weng wu";

/// Zero-initial syllables, enumerated independently of the table.
pub const ZERO_LEAD_SYLLABLES: &[&str] = &[
    "a", "ai", "an", "ang", "ao", "e", "ei", "en", "eng", "er", "o", "ou",
];

/// Fragment counts for keyboard-layout statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub syllable_count: usize,
    pub lead_count: usize,
    pub follow_count: usize,
    pub single_follow_count: usize,
    pub multi_follow_count: usize,
}

/// Canonical set of valid (lead, follow) pairs.
///
/// Declaration order is preserved: `all()` yields syllables in the order
/// they were inserted, which keeps every construction that iterates the
/// inventory reproducible.
#[derive(Debug, Clone, Default)]
pub struct SyllableInventory {
    ordered: Vec<Syllable>,
    by_spelling: AHashMap<String, usize>,
    leads: Vec<String>,
    follows: Vec<String>,
    lead_map: AHashMap<String, Vec<usize>>,
    follow_map: AHashMap<String, Vec<usize>>,
}

impl SyllableInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from an explicit pair list.
    pub fn from_pairs<I, L, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, F)>,
        L: Into<String>,
        F: Into<String>,
    {
        let mut inv = Self::new();
        for (lead, follow) in pairs {
            inv.insert(Syllable::new(lead, follow));
        }
        inv
    }

    /// Build an inventory from a reference table plus a zero-initial list.
    ///
    /// Zero-initial syllables are registered first, then each table line is
    /// read as `lead syllable syllable …` with the follow obtained by
    /// stripping the lead prefix from the syllable.
    pub fn from_raw_table(table: &str, zero_leads: &[&str]) -> Self {
        let mut inv = Self::new();

        for syl in zero_leads {
            inv.insert(Syllable::zero_initial(*syl));
        }

        for line in table.lines() {
            let mut items = line.split_whitespace();
            let lead = match items.next() {
                Some(lead) => lead,
                None => continue,
            };
            for spelling in items {
                let follow = spelling.strip_prefix(lead).unwrap_or(spelling);
                inv.insert(Syllable::new(lead, follow));
            }
        }

        debug!(
            syllables = inv.ordered.len(),
            leads = inv.leads.len(),
            follows = inv.follows.len(),
            "built syllable inventory from reference table"
        );
        inv
    }

    /// Derive an inventory as exactly the syllable set appearing in a
    /// character dictionary.
    pub fn from_dictionary(dict: &CharacterDict) -> Self {
        let mut inv = Self::new();
        for spelling in dict.pronunciations() {
            inv.insert(Syllable::split(spelling));
        }
        inv
    }

    /// The standard inventory built from the embedded reference table.
    pub fn standard() -> Self {
        Self::from_raw_table(RAW_SYLLABLE_TABLE, ZERO_LEAD_SYLLABLES)
    }

    /// Insert a syllable. Duplicate spellings are ignored so that the first
    /// declaration keeps its position.
    pub fn insert(&mut self, syllable: Syllable) {
        if self.by_spelling.contains_key(&syllable.spelling()) {
            return;
        }

        let idx = self.ordered.len();
        self.by_spelling.insert(syllable.spelling(), idx);

        if !self.leads.contains(&syllable.lead) {
            self.leads.push(syllable.lead.clone());
        }
        if !self.follows.contains(&syllable.follow) {
            self.follows.push(syllable.follow.clone());
        }

        self.lead_map
            .entry(syllable.lead.clone())
            .or_default()
            .push(idx);
        self.follow_map
            .entry(syllable.follow.clone())
            .or_default()
            .push(idx);

        self.ordered.push(syllable);
    }

    /// True if `lead + follow` denotes a syllable in the inventory.
    pub fn is_valid(&self, lead: &str, follow: &str) -> bool {
        match self.by_spelling.get(&format!("{}{}", lead, follow)) {
            Some(&idx) => {
                let syl = &self.ordered[idx];
                syl.lead == lead && syl.follow == follow
            }
            None => false,
        }
    }

    /// Look up the canonical decomposition of a spelling.
    pub fn get(&self, spelling: &str) -> Option<&Syllable> {
        self.by_spelling
            .get(spelling)
            .map(|&idx| &self.ordered[idx])
    }

    /// All syllables in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &Syllable> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Distinct lead fragments in first-seen order (includes "" when the
    /// inventory holds zero-initial syllables).
    pub fn leads(&self) -> &[String] {
        &self.leads
    }

    /// Distinct follow fragments in first-seen order.
    pub fn follows(&self) -> &[String] {
        &self.follows
    }

    /// Syllables sharing a lead fragment, in declaration order.
    pub fn syllables_with_lead(&self, lead: &str) -> Vec<&Syllable> {
        self.fragment_group(&self.lead_map, lead)
    }

    /// Syllables sharing a follow fragment, in declaration order.
    pub fn syllables_with_follow(&self, follow: &str) -> Vec<&Syllable> {
        self.fragment_group(&self.follow_map, follow)
    }

    fn fragment_group(&self, map: &AHashMap<String, Vec<usize>>, key: &str) -> Vec<&Syllable> {
        map.get(key)
            .map(|ids| ids.iter().map(|&i| &self.ordered[i]).collect())
            .unwrap_or_default()
    }

    /// Fragment counts for layout statistics.
    ///
    /// Counts are derived from the syllables actually present, not from a
    /// fixed fragment alphabet: the empty zero-initial lead is excluded
    /// from `lead_count`, and a follow counts as "single" when it is one
    /// character long. For the standard inventory this gives 23 leads,
    /// where counting zero-initial spellings as leads would give 35.
    pub fn summary(&self) -> InventorySummary {
        let follows: Vec<&String> = self.follows.iter().filter(|f| !f.is_empty()).collect();
        let single = follows.iter().filter(|f| f.chars().count() == 1).count();
        InventorySummary {
            syllable_count: self.ordered.len(),
            lead_count: self.leads.iter().filter(|l| !l.is_empty()).count(),
            follow_count: follows.len(),
            single_follow_count: single,
            multi_follow_count: follows.len() - single,
        }
    }
}
