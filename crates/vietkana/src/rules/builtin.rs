//! Built-in rule data: Vietnamese onset / nucleus / coda tables and name overrides.
//!
//! Table order is load-bearing (digraphs before their one-letter prefixes, hard rimes first).
//! Some nucleus patterns appear more than once with different fragment sets; only the first
//! occurrence is ever matched.

/// Onset consonants.
pub const ONSETS: &[(&str, &[&str])] = &[
  ("ngh", &["ゲ", "グ"]),
  ("ng", &["グ", "ンゴ"]),
  ("gh", &["グ"]),
  ("gi", &["ジ", "ギ"]),
  ("nh", &["ニ", "ン"]),
  ("ph", &["フ", "ファ"]),
  ("th", &["ト", "ティ"]),
  ("tr", &["チ", "トゥ"]),
  ("ch", &["チ", "チャ"]),
  ("kh", &["ク", "カ"]),
  ("qu", &["ク", "クァ", "クワ"]),
  ("x", &["ス"]),
  ("s", &["ス"]),
  ("v", &["ヴ", "ブ"]),
  ("d", &["ズ", "ジ", "ド"]),
  ("đ", &["ド"]),
  ("r", &["ラ", "リ", "ル", "レ", "ロ"]),
  ("l", &["ラ", "リ", "ル", "レ", "ロ"]),
  ("h", &["ホ", "フ"]),
  ("b", &["バ"]),
  ("c", &["ク", "カ"]),
  ("k", &["ク", "カ"]),
  ("g", &["グ", "ガ"]),
  ("t", &["ト"]),
  ("n", &["ン", "ナ"]),
  ("m", &["ム", "マ"]),
  ("p", &["プ"]),
];

/// Coda consonants, matched against the end of the syllable.
pub const CODAS: &[(&str, &[&str])] = &[
  ("ng", &["ン"]),
  ("nh", &["ン", "ニ"]),
  ("ch", &["ック", "ク"]),
  ("c", &["ック", "ク"]),
  ("t", &["ット", "ト"]),
  ("p", &["ップ", "プ"]),
  ("n", &["ン"]),
  ("m", &["ム", "ン"]),
];

/// Vowel nuclei, hardest rimes first.
pub const NUCLEI: &[(&str, &[&str])] = &[
  ("uyê", &["ウエ", "ウィエ", "ユエ"]),
  ("uyê", &["ウエ", "ウィエ", "ユエ"]),
  ("uy", &["ウイ", "ウィ", "ユイ"]),
  ("ươ", &["ウォ", "ウオ", "ウー"]),
  ("uô", &["ウォ", "ウオ"]),
  ("iê", &["イエ", "イェ"]),
  ("yê", &["イエ", "イェ"]),
  ("ia", &["イア", "ヤ"]),
  ("ya", &["ヤ"]),
  ("ưa", &["ウア", "ユーア"]),
  ("uơ", &["ウォ", "ウオ"]),
  ("oe", &["オエ", "ウェ"]),
  ("oa", &["オア", "ワ"]),
  ("uê", &["ウエ", "ウェ"]),
  ("ua", &["ウア", "ワ"]),
  ("uo", &["ウォ", "ウオ"]),
  ("ươ", &["ウォ", "ウオ"]),
  ("ươ", &["ウォ", "ウオ"]),
  ("au", &["アウ"]),
  ("ao", &["アオ"]),
  ("ai", &["アイ"]),
  ("ay", &["アイ"]),
  ("oi", &["オイ"]),
  ("ui", &["ウイ"]),
  ("iu", &["イウ"]),
  ("ia", &["イア"]),
  ("a", &["ア", "アー"]),
  ("ă", &["ア"]),
  ("â", &["ア", "アー"]),
  ("e", &["エ", "エー"]),
  ("ê", &["エ", "エー"]),
  ("i", &["イ", "イー"]),
  ("o", &["オ", "オー"]),
  ("ô", &["オ", "オー"]),
  ("ơ", &["オ", "オー"]),
  ("u", &["ウ", "ウー"]),
  ("ư", &["ウ", "ユー", "ウー"]),
  ("y", &["イ", "イー"]),
];

/// Established renderings of common family and given names, keyed by the tone-stripped
/// lowercase syllable.
pub const OVERRIDES: &[(&str, &[&str])] = &[
  // family names
  ("nguyen", &["グエン"]),
  ("tran", &["チャン"]),
  ("le", &["レー", "レ"]),
  ("pham", &["ファム"]),
  ("hoang", &["ホアン"]),
  ("huynh", &["フイン"]),
  ("phan", &["ファン"]),
  ("vu", &["ヴー", "ブー"]),
  ("vo", &["ヴォー", "ボー"]),
  ("dang", &["ダン"]),
  ("bui", &["ブイ"]),
  ("do", &["ドー", "ド"]),
  ("ho", &["ホー"]),
  ("ngo", &["ゴー", "ンゴ"]),
  ("duong", &["ズオン", "ドゥオン"]),
  ("ly", &["リー"]),
  // middle and given names
  ("thi", &["ティ", "ティー"]),
  ("van", &["ヴァン", "バン"]),
  ("anh", &["アイン", "アン"]),
  ("minh", &["ミン"]),
  ("thanh", &["タイン", "タン"]),
  ("trang", &["チャン", "トラン"]),
  ("huong", &["フオン", "フォン"]),
  ("phuong", &["フオン", "フォン"]),
  ("ngoc", &["ゴック", "ゴク"]),
  ("duc", &["ドゥック", "ドゥク"]),
  ("tuan", &["トゥアン"]),
  ("quang", &["クアン", "クワン"]),
  ("hung", &["フン", "フング"]),
  ("thu", &["トゥー", "トゥ"]),
  ("hieu", &["ヒエウ", "ヒェウ"]),
  ("khanh", &["カイン", "カン"]),
  ("giang", &["ザン", "ジャン"]),
  ("nhung", &["ニュン", "ニュング"]),
  ("yen", &["イエン"]),
  ("mai", &["マイ"]),
  ("hai", &["ハイ"]),
  ("nam", &["ナム"]),
  ("hoa", &["ホア"]),
  ("thao", &["タオ"]),
  ("trung", &["チュン", "チュング"]),
  ("cuong", &["クオン", "クォン"]),
  ("dung", &["ズン", "ズング"]),
  ("binh", &["ビン"]),
  ("xuan", &["スアン", "スワン"]),
  ("kim", &["キム"]),
  ("tam", &["タム"]),
  ("son", &["ソン"]),
  ("tu", &["トゥー", "トゥ"]),
  ("hanh", &["ハイン", "ハン"]),
  ("chi", &["チー", "チ"]),
];
