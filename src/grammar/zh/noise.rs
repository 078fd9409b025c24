//! Negative disambiguation guards.
//!
//! These consume spans that look like time expressions but are not:
//! enumeration "点" ("再说两点"), degree "一点" ("简洁一点"), bare long
//! digit runs (order numbers, ID numbers), and idioms. A NOISE tag wins the
//! cover for its span and suppresses everything inside it.

use crate::grammar::fragment::{Fragment, W_NOISE};
use crate::tag::WireTag;
use regex::Captures;

pub(super) fn fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: "noise_enumeration_dian",
            pattern: regex!(concat!(
                "(?:再说|还有|补充|强调|总结|归纳|列举|说|讲|提)",
                "[0-9零一二两三四五六七八九十]{1,3}点",
            )),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            name: "noise_ordinal_dian",
            pattern: regex!("第[0-9零一二两三四五六七八九十]{1,3}点"),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            name: "noise_degree_yidian",
            pattern: regex!(concat!(
                "(?:快|慢|早|晚|大|小|多|少|好|高|低|长|短|简单|简洁|容易|方便|便宜|轻松|安静|干净|清楚|明白|注意)",
                "一点",
            )),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            name: "noise_yidian_negation",
            pattern: regex!("一点(?:也|都)(?:不|没)"),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            name: "noise_youdian",
            pattern: regex!("有点|差点|点赞|点菜|点名|点头|点击|点评"),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            name: "noise_digit_run",
            pattern: regex!("[0-9]{5,}"),
            weight: W_NOISE,
            emit: emit_noise,
        },
        Fragment {
            name: "noise_idiom",
            pattern: regex!("一日之计在于晨|度日如年|一时半会"),
            weight: W_NOISE,
            emit: emit_noise,
        },
    ]
}

fn emit_noise(_caps: &Captures<'_>) -> Option<WireTag> {
    Some(WireTag::new("noise"))
}
