const OPEN: char = '（';
const CLOSE: char = '）';

/// Every spelling an abbreviated form stands for.
///
/// Each `（…）` group is optional, so `あ（い）う` gives `あいう` and `あう`.
/// The form with every group kept comes first, the one with every group
/// dropped comes last. Text after an unclosed bracket is kept verbatim.
pub fn expand_abbreviation(abbreviated: &str) -> Vec<String> {
    let mut expansions = vec![String::new()];
    let mut rest = abbreviated;

    while let Some(open) = rest.find(OPEN) {
        let after = &rest[open + OPEN.len_utf8()..];
        let Some(close) = after.find(CLOSE) else {
            break;
        };
        let literal = &rest[..open];
        let optional = &after[..close];

        expansions = expansions
            .into_iter()
            .flat_map(|prefix| {
                let dropped = format!("{prefix}{literal}");
                let kept = format!("{dropped}{optional}");
                [kept, dropped]
            })
            .collect();
        rest = &after[close + CLOSE.len_utf8()..];
    }

    let mut unique: Vec<String> = Vec::with_capacity(expansions.len());
    for mut expansion in expansions {
        expansion.push_str(rest);
        if !unique.contains(&expansion) {
            unique.push(expansion);
        }
    }
    unique
}
