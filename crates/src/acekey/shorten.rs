use crate::acekey::prefix_related;
use log::debug;

// Longest binding not yet visited this pass; ties go to the earlier entity.
fn longest_unsettled(bindings: &[Option<String>], settled: &[bool]) -> Option<usize> {
    bindings
        .iter()
        .enumerate()
        .filter(|(idx, _)| !settled[*idx])
        .filter_map(|(idx, b)| b.as_ref().map(|b| (idx, b.len())))
        .max_by(|(ia, la), (ib, lb)| la.cmp(lb).then(ib.cmp(ia)))
        .map(|(idx, _)| idx)
}

fn shortest_free_prefix(idx: usize, bindings: &[Option<String>], floor: usize) -> Option<String> {
    let current = bindings[idx].as_deref()?;
    (floor.max(1)..current.len())
        .map(|n| &current[..n])
        .find(|prefix| {
            bindings.iter().enumerate().all(|(j, other)| {
                j == idx
                    || other
                        .as_deref()
                        .map_or(true, |other| !prefix_related(prefix, other))
            })
        })
        .map(str::to_string)
}

/// Trims every binding to the shortest prefix that keeps the set unique and
/// prefix-free, never going below the entity's floor.
///
/// Each pass visits bindings longest first, so long strings give up the
/// short prefix space before the shorter ones are checked. Passes repeat
/// until one changes nothing.
pub fn shorten(bindings: &mut [Option<String>], floors: &[usize]) {
    let mut pass = 0usize;
    loop {
        pass += 1;
        let mut changed = false;
        let mut settled = vec![false; bindings.len()];
        while let Some(idx) = longest_unsettled(bindings, &settled) {
            settled[idx] = true;
            let floor = floors.get(idx).copied().unwrap_or(1);
            if let Some(shorter) = shortest_free_prefix(idx, bindings, floor) {
                debug!("pass {pass}: #{idx} shortened to {shorter:?}");
                bindings[idx] = Some(shorter);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}
