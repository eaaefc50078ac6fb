//! Prompt construction and completion parsing for ad copy generation.

use crate::models::CompletionMessage;

/// Marker the model is expected to place between variations.
pub const VARIATION_SEPARATOR: &str = "🚀";

pub const SYSTEM_TEMPLATE: &str = "أنت خبير في كتابة الإعلانات باللغة العربية والإنجليزية. \
أريدك أن تخرج لي {{n}} نسخٍ إعلانية احترافية قصيرة لكل منهما.";

const USER_PREAMBLE: &str = "استخدم المعلومات التالية لكتابة إعلانين (عربي وإنجليزي) لكل نسخة:\n\n";

const USER_FIELDS: &str = "\n\nلكل نسخة، قدّم:\n\
- عنوان (Headline)\n\
- نص وجيز (Body)\n\
- نداء للعمل (Call to Action)\n\
- الفئة المستهدفة (Target Audience)\n\n\
رجاءً اعدّد النسخ وعدّد الحقول.";

/// Builds the system and user messages for one generation call.
///
/// `prompt` is embedded as given; callers pass the already trimmed text.
pub fn build_messages(prompt: &str, num_variations: i64) -> [CompletionMessage; 2] {
    let system = SYSTEM_TEMPLATE.replace("{{n}}", &num_variations.to_string());
    let user = format!("{USER_PREAMBLE}{prompt}{USER_FIELDS}");
    [CompletionMessage::system(system), CompletionMessage::user(user)]
}

/// Splits raw completion text into variations, keeping order and
/// dropping segments that are blank after trimming.
pub fn split_variations(text: &str) -> Vec<String> {
    text.trim()
        .split(VARIATION_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
