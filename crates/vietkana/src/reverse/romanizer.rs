//! Katakana → lowercase romaji.
//!
//! Maximal munch: two-character combinations are tried before single characters. Coverage is
//! limited to what personal names need; anything else is dropped.

use crate::text::LONG_VOWEL_MARK;

/// Contracted syllables and loanword extended sounds.
#[rustfmt::skip]
const DIGRAPHS: &[(&str, &str)] = &[
  ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
  ("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho"),
  ("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho"),
  ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
  ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
  ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
  ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),
  ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
  ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
  ("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo"),
  ("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo"),
  ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"), ("フュ", "fyu"),
  ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴェ", "ve"), ("ヴォ", "vo"), ("ヴュ", "vyu"),
  ("ティ", "ti"), ("ディ", "di"), ("トゥ", "tu"), ("ドゥ", "du"),
  ("チェ", "che"), ("シェ", "she"), ("ジェ", "je"),
  ("ツァ", "tsa"), ("ツィ", "tsi"), ("ツェ", "tse"), ("ツォ", "tso"),
];

/// Single full-size kana.
#[rustfmt::skip]
const MONO: &[(char, &str)] = &[
  ('ア', "a"), ('イ', "i"), ('ウ', "u"), ('エ', "e"), ('オ', "o"),
  ('カ', "ka"), ('キ', "ki"), ('ク', "ku"), ('ケ', "ke"), ('コ', "ko"),
  ('サ', "sa"), ('シ', "shi"), ('ス', "su"), ('セ', "se"), ('ソ', "so"),
  ('タ', "ta"), ('チ', "chi"), ('ツ', "tsu"), ('テ', "te"), ('ト', "to"),
  ('ナ', "na"), ('ニ', "ni"), ('ヌ', "nu"), ('ネ', "ne"), ('ノ', "no"),
  ('ハ', "ha"), ('ヒ', "hi"), ('フ', "fu"), ('ヘ', "he"), ('ホ', "ho"),
  ('マ', "ma"), ('ミ', "mi"), ('ム', "mu"), ('メ', "me"), ('モ', "mo"),
  ('ヤ', "ya"), ('ユ', "yu"), ('ヨ', "yo"),
  ('ラ', "ra"), ('リ', "ri"), ('ル', "ru"), ('レ', "re"), ('ロ', "ro"),
  ('ワ', "wa"), ('ヲ', "o"),
  ('ン', "n"),
  ('ガ', "ga"), ('ギ', "gi"), ('グ', "gu"), ('ゲ', "ge"), ('ゴ', "go"),
  ('ザ', "za"), ('ジ', "ji"), ('ズ', "zu"), ('ゼ', "ze"), ('ゾ', "zo"),
  ('ダ', "da"), ('ヂ', "ji"), ('ヅ', "zu"), ('デ', "de"), ('ド', "do"),
  ('バ', "ba"), ('ビ', "bi"), ('ブ', "bu"), ('ベ', "be"), ('ボ', "bo"),
  ('パ', "pa"), ('ピ', "pi"), ('プ', "pu"), ('ペ', "pe"), ('ポ', "po"),
  ('ヴ', "vu"),
];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Romanizes one Katakana token.
///
/// - `ッ`, small kana outside a combination, and non-Katakana contribute nothing
/// - `ー` repeats the preceding vowel letter, or contributes nothing if there is none
pub fn katakana_to_romaji(token: &str) -> String {
  let chars: Vec<char> = token.trim().chars().collect();
  let mut out = String::with_capacity(chars.len() * 3);
  let mut i = 0;

  while i < chars.len() {
    if let Some(pair) = chars.get(i..i + 2) {
      let pair: String = pair.iter().collect();
      if let Some((_, romaji)) = DIGRAPHS.iter().find(|(kana, _)| *kana == pair) {
        out.push_str(romaji);
        i += 2;
        continue;
      }
    }

    let c = chars[i];
    if c == LONG_VOWEL_MARK {
      if let Some(last) = out.chars().last().filter(|l| VOWELS.contains(l)) {
        out.push(last);
      }
    } else if let Some((_, romaji)) = MONO.iter().find(|(kana, _)| *kana == c) {
      out.push_str(romaji);
    }
    i += 1;
  }

  out
}
