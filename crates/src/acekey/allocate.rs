use crate::acekey::candidates::Candidates;
use crate::acekey::prefix_related;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

/// A branch held by one entity together with the stage it was proposed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Held {
    pub stage: usize,
    pub branch: String,
}

// Outcome of one round for a single branch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    Sole(usize),
    Contested,
}

// Groups this round's proposals by value. Values already held are never proposed.
fn round_claims<'a>(
    stage: usize,
    candidates: &'a [Candidates],
    held: &[Option<Held>],
    taken: &HashSet<String>,
) -> HashMap<&'a str, Claim> {
    let mut claims: HashMap<&'a str, Claim> = HashMap::new();
    for (idx, cand) in candidates.iter().enumerate() {
        if held[idx].is_some() {
            continue;
        }
        let Some(branch) = cand.stage(stage) else {
            continue;
        };
        if taken.contains(branch) {
            continue;
        }
        claims
            .entry(branch)
            .and_modify(|c| *c = Claim::Contested)
            .or_insert(Claim::Sole(idx));
    }
    claims
}

fn settled(stage: usize, candidates: &[Candidates], held: &[Option<Held>]) -> bool {
    held.iter()
        .zip(candidates)
        .all(|(h, c)| h.is_some() || c.stage_count() <= stage)
}

/// Resolves conflicts breadth-first by stage.
///
/// In round `k` every unassigned entity proposes its stage-`k` branch. A
/// value proposed by exactly one entity is assigned to it; a value proposed
/// by several is dropped for the round and all of them move on to stage
/// `k + 1`. Entities left over once every stage is spent fall back to their
/// full-name branch in input order, if nobody holds it yet.
///
/// The result is indexed like `candidates`. Held branches are unique but may
/// still be prefixes of each other; see [`repair_prefixes`].
pub fn allocate(candidates: &[Candidates]) -> Vec<Option<Held>> {
    let mut held: Vec<Option<Held>> = vec![None; candidates.len()];
    let mut taken: HashSet<String> = HashSet::new();
    let rounds = candidates
        .iter()
        .map(Candidates::stage_count)
        .max()
        .unwrap_or(0);

    for stage in 0..rounds {
        if settled(stage, candidates, &held) {
            break;
        }
        let claims = round_claims(stage, candidates, &held, &taken);
        for (idx, cand) in candidates.iter().enumerate() {
            if held[idx].is_some() {
                continue;
            }
            let Some(branch) = cand.stage(stage) else {
                continue;
            };
            match claims.get(branch) {
                Some(Claim::Sole(owner)) if *owner == idx => {
                    debug!("round {stage}: #{idx} takes {branch:?}");
                    taken.insert(branch.to_string());
                    held[idx] = Some(Held {
                        stage,
                        branch: branch.to_string(),
                    });
                }
                Some(_) => debug!("round {stage}: {branch:?} contested, #{idx} advances"),
                None => debug!("round {stage}: {branch:?} already held, #{idx} advances"),
            }
        }
    }

    // identical normalized names: the first one in input order wins
    for (idx, cand) in candidates.iter().enumerate() {
        if held[idx].is_some() {
            continue;
        }
        let Some(last) = cand.last() else {
            warn!("#{idx} has no alphanumeric characters, no keybinding assigned");
            continue;
        };
        if taken.contains(last) {
            warn!("#{idx} duplicates the name {last:?} of an earlier entity, no keybinding assigned");
            continue;
        }
        info!("#{idx} falls back to its full name {last:?}");
        taken.insert(last.to_string());
        held[idx] = Some(Held {
            stage: cand.stage_count() - 1,
            branch: last.to_string(),
        });
    }

    held
}

// First pair (longer, shorter) in input order where `shorter` is a proper prefix of `longer`.
fn find_prefix_pair(held: &[Option<Held>]) -> Option<(usize, usize)> {
    for (i, long) in held.iter().enumerate() {
        let Some(long) = long else { continue };
        for (j, short) in held.iter().enumerate() {
            let Some(short) = short else { continue };
            if i != j
                && long.branch.len() > short.branch.len()
                && long.branch.starts_with(&short.branch)
            {
                return Some((i, j));
            }
        }
    }
    None
}

// Moves `idx` to its first later stage that clashes with nobody.
fn relocate(idx: usize, candidates: &[Candidates], held: &mut [Option<Held>]) -> bool {
    let Some(current) = held[idx].as_ref() else {
        return false;
    };
    let cand = &candidates[idx];
    let free = (current.stage + 1..cand.stage_count()).find_map(|stage| {
        let branch = cand.stage(stage)?;
        let clashes = held.iter().enumerate().any(|(j, h)| {
            j != idx
                && h.as_ref()
                    .is_some_and(|h| prefix_related(&h.branch, branch))
        });
        (!clashes).then(|| Held {
            stage,
            branch: branch.to_string(),
        })
    });
    match free {
        Some(next) => {
            info!("#{idx} moves to stage {} ({:?}) to clear a prefix clash", next.stage, next.branch);
            held[idx] = Some(next);
            true
        }
        None => false,
    }
}

/// Restores the no-prefix property on an allocation.
///
/// For each clash the longer entity moves to a later free stage, else the
/// shorter one does. If neither can move the longer entity could never be
/// selected by typing, so it loses its binding.
pub fn repair_prefixes(candidates: &[Candidates], held: &mut [Option<Held>]) {
    while let Some((long, short)) = find_prefix_pair(held) {
        if relocate(long, candidates, held) || relocate(short, candidates, held) {
            continue;
        }
        warn!("#{long} is shadowed by the keybinding of #{short}, no keybinding assigned");
        held[long] = None;
    }
}
