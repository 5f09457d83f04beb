//! Character resource pools.
//!
//! Static alphabets used when a name is generated from scratch. Each pool is
//! split into single code point units once, on first use, and is read-only
//! for the rest of the process. No unit in any pool is a combining mark,
//! emoji modifier or regional indicator, so concatenating pool units never
//! fuses two of them into one grapheme cluster either.

use std::sync::LazyLock;

use super::grapheme::GraphemeSequence;

const HIRAGANA: &str = "\
ぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞ\
ただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽ\
まみむめもゃやゅゆょよらりるれろゎわゐゑをんゔゕゖゝゞ";

const KATAKANA: &str = "\
ァアィイゥウェエォオカガキギクグケゲコゴサザシジスズセゼソゾ\
タダチヂッツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポ\
マミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶヷヸヹヺーヽヾ";

const KANJI: &str = "\
一右雨円王音下火花貝学気九休玉金空月犬見五口校左三山子四糸字耳七車手十出\
女小上森人水正生青夕石赤千川先早草足村大男竹中虫町天田土二日入年白八百文\
木本名目立力林六引羽雲園遠何科夏家歌画回会海絵外角楽活間丸岩顔汽記帰弓牛\
魚京強教近兄形計元言原戸古午後語工公広交光考行高黄合谷国黒今才細作算止市\
矢姉思紙寺自時室社弱首秋週春書少場色食心新親図数西声星晴切雪船線前組走多\
太体台地池知茶昼長鳥朝直通弟店点電刀冬当東答頭同道読内南肉馬売買麦半番父\
風分聞米歩母方北毎妹万明鳴毛門夜野友用曜来里理話悪安暗医委意育員院飲運泳\
駅央横屋温化荷界開階寒感漢館岸起期客究急級宮球去橋業曲局銀区苦具君係軽血\
決研県庫湖向幸港号根祭皿仕死使始指歯詩次事持式実写者主守取酒受州拾終習集\
住重宿所暑助昭消商章勝乗植申身神真深進世整昔全相送想息速族他打対待代第題\
炭短談着注柱丁帳調追定庭笛鉄転都度投豆島湯登等動童農波配倍箱畑発反坂板皮\
悲美鼻筆氷表秒病品負部服福物平返勉放味命面問役薬由油有遊予羊洋葉陽様落流\
旅両緑礼列練路和愛案以衣位囲胃印英栄塩億加果貨課芽改械害街各覚完官管関観\
願希季紀喜旗器機議求泣救給挙漁共協鏡競極訓軍郡径型景芸欠結建健験固功好候\
航康告差菜最材昨札刷殺察参産散残士氏史司試児治辞失借種周祝順初松笑唱焼象\
照賞臣信成省清静席積折節説浅戦選然争倉巣束側続卒孫帯隊達単置仲貯兆腸低底\
停的典伝徒努灯堂働特得毒熱念敗梅博飯飛費必票標不夫付府副粉兵別辺変便包法\
望牧末満未脈民無約勇要養浴利陸良料量輪類令冷例歴連老労録龍鳳麟亀虎狐狸猫\
鶴桜梅竜夢星宙雷嵐霧霞雫";

const LATIN: &str = "\
ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const SYMBOLS: &str = "\
★☆♪♫♬♩♭♯♡♥♢♦♤♠♧♣◆◇○●◎□■△▲▽▼※〒→←↑↓⇒⇔∀∃∇∂∞∴∵∽≒≠≡≦≧\
∮∑√⊥∠∟⊿∩∪∧∨¬÷×±§¶†‡‰℃℉Å¥£¢￥〆〇々〃仝ゝゞヽヾ♂♀☀☁☂☃☎☏☜☞\
✓✔✕✖✗✘✙✚✛✜✝✞✟✠✡✢✣✤✥✦✧✩✪✫✬✭✮✯✰❀❁❂❃❄❅❆❇❈❉❊❋\
【】《》〈〉「」『』〔〕〖〗〘〙〚〛・…‥〜∽∬∫";

const PICTOGRAPHS: &str = "\
😀😁😂🤣😃😄😅😆😉😊😋😎😍😘🥰😗😙😚🙂🤗🤩🤔🤨😐😑😶🙄😏😣😥\
😮🤐😯😪😫🥱😴😌😛😜😝🤤😒😓😔😕🙃🤑😲🙁😖😞😟😤😢😭😦😧😨😩\
🤯😬😰😱🥵🥶😳🤪😵😡😠🤬😷🤒🤕🤢🤮🤧😇🥳🥺🤠🤡🤥🤫🤭🧐🤓😈👿\
👹👺💀👻👽👾🤖💩😺😸😹😻😼😽🙀😿😾🐶🐱🐭🐹🐰🦊🐻🐼🐨🐯🦁\
🐮🐷🐸🐵🐔🐧🐦🐤🦆🦅🦉🦇🐺🐗🐴🦄🐝🐛🦋🐌🐞🐜🦗🦂🐢🐍🦎🦖🦕🐙\
🦑🦐🦞🦀🐡🐠🐟🐬🐳🐋🦈🐊🐅🐆🦓🦍🐘🦛🦏🐪🐫🦒🦘🐃🐂🐄🐎🐖🐏🐑\
🍏🍎🍐🍊🍋🍌🍉🍇🍓🍈🍒🍑🥭🍍🥥🥝🍅🍆🥑🥦🥬🥒🌽🥕🥔🍠🥐🍞🥖🥨\
🧀🥚🍳🥞🥓🥩🍗🍖🌭🍔🍟🍕🥪🥙🌮🌯🥗🥘🍝🍜🍲🍛🍣🍱🥟🍤🍙🍚🍘🍥\
🌈🌊🌋🌌🌍🌎🌏🌐🌑🌒🌓🌔🌕🌖🌗🌘🌙🌚🌛🌜🌝🌞🌟🌠🌰🌱🌲🌳🌴🌵\
🌷🌸🌹🌺🌻🌼🌽🌾🌿🍀🍁🍂🍃🍄🎀🎁🎂🎃🎄🎅🎆🎇🎈🎉🎊🎋🎌🎍🎎🎏";

/// Named source alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Hiragana,
    Katakana,
    Kanji,
    Latin,
    Symbols,
    Pictographs,
}

impl Pool {
    pub const ALL: [Pool; 6] = [
        Pool::Hiragana,
        Pool::Katakana,
        Pool::Kanji,
        Pool::Latin,
        Pool::Symbols,
        Pool::Pictographs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pool::Hiragana => "hiragana",
            Pool::Katakana => "katakana",
            Pool::Kanji => "kanji",
            Pool::Latin => "latin",
            Pool::Symbols => "symbols",
            Pool::Pictographs => "pictographs",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Pool::Hiragana => HIRAGANA,
            Pool::Katakana => KATAKANA,
            Pool::Kanji => KANJI,
            Pool::Latin => LATIN,
            Pool::Symbols => SYMBOLS,
            Pool::Pictographs => PICTOGRAPHS,
        }
    }
}

/// An immutable alphabet of grapheme units. Duplicates are allowed and each
/// occurrence is sampled independently.
#[derive(Debug)]
pub struct CharacterPool {
    pool: Pool,
    units: Vec<&'static str>,
}

impl CharacterPool {
    fn load(pool: Pool) -> Self {
        let source = pool.source();
        Self {
            pool,
            units: source
                .char_indices()
                .map(|(i, c)| &source[i..i + c.len_utf8()])
                .collect(),
        }
    }

    pub fn pool(&self) -> Pool {
        self.pool
    }

    pub fn name(&self) -> &'static str {
        self.pool.name()
    }

    pub fn units(&self) -> &[&'static str] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|u| *u == unit)
    }

    pub fn as_sequence(&self) -> GraphemeSequence {
        self.units.iter().copied().collect()
    }
}

static POOLS: LazyLock<[CharacterPool; 6]> = LazyLock::new(|| Pool::ALL.map(CharacterPool::load));

/// Fetch one of the process-wide pools.
pub fn get_pool(pool: Pool) -> &'static CharacterPool {
    // POOLS is built in `Pool::ALL` order, which is declaration order
    &POOLS[pool as usize]
}

/// Which alphabet a generated name is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolSelection {
    HiraganaSymbols,
    KatakanaSymbols,
    Kanji,
    Pictographs,
    /// Union of every pool.
    Complex,
}

impl PoolSelection {
    /// Selections picked from when no usable hint is given.
    pub const RANDOM_CHOICES: [PoolSelection; 4] = [
        PoolSelection::HiraganaSymbols,
        PoolSelection::KatakanaSymbols,
        PoolSelection::Kanji,
        PoolSelection::Pictographs,
    ];

    /// Match a resource hint by case-insensitive prefix.
    ///
    /// `h` hiragana, `kat` katakana, `kan` kanji, `e` emoji pictographs,
    /// `c` everything. Anything else is `None`.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let hint = hint.trim().to_lowercase();
        if hint.starts_with('h') {
            Some(PoolSelection::HiraganaSymbols)
        } else if hint.starts_with("kat") {
            Some(PoolSelection::KatakanaSymbols)
        } else if hint.starts_with("kan") {
            Some(PoolSelection::Kanji)
        } else if hint.starts_with('e') {
            Some(PoolSelection::Pictographs)
        } else if hint.starts_with('c') {
            Some(PoolSelection::Complex)
        } else {
            None
        }
    }

    pub fn pools(self) -> &'static [Pool] {
        match self {
            PoolSelection::HiraganaSymbols => &[Pool::Hiragana, Pool::Symbols],
            PoolSelection::KatakanaSymbols => &[Pool::Katakana, Pool::Symbols],
            PoolSelection::Kanji => &[Pool::Kanji],
            PoolSelection::Pictographs => &[Pool::Pictographs],
            PoolSelection::Complex => &Pool::ALL,
        }
    }

    /// All units of the selected pools, in pool order.
    pub fn alphabet(self) -> Vec<&'static str> {
        self.pools()
            .iter()
            .flat_map(|p| get_pool(*p).units().iter().copied())
            .collect()
    }

    /// Whether `unit` belongs to any of the selected pools.
    pub fn contains(self, unit: &str) -> bool {
        self.pools().iter().any(|p| get_pool(*p).contains(unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::grapheme::{segment, segment_graphemes};

    #[test]
    fn test_pools_are_loaded() {
        for pool in Pool::ALL {
            let loaded = get_pool(pool);
            assert_eq!(loaded.pool(), pool);
            assert!(!loaded.is_empty(), "{} is empty", loaded.name());
        }
        assert_eq!(get_pool(Pool::Latin).len(), 62);
        assert!(get_pool(Pool::Kanji).contains("龍"));
        assert!(get_pool(Pool::Pictographs).contains("🐱"));
        assert!(!get_pool(Pool::Kanji).contains("a"));
    }

    #[test]
    fn test_pool_units_are_single_units() {
        for pool in Pool::ALL {
            for unit in get_pool(pool).units() {
                assert_eq!(segment(unit).len(), 1, "{:?} in {}", unit, pool.name());
                assert_eq!(segment_graphemes(unit).len(), 1, "{:?}", unit);
            }
        }
    }

    #[test]
    fn test_pool_units_never_fuse() {
        // every pool joined end to end splits back into the same clusters
        for pool in Pool::ALL {
            let seq = get_pool(pool).as_sequence();
            assert_eq!(segment(&seq.join()), seq, "{}", pool.name());
            assert_eq!(segment_graphemes(&seq.join()), seq, "{}", pool.name());
        }
        let all = PoolSelection::Complex.alphabet();
        assert_eq!(segment_graphemes(&all.concat()).len(), all.len());
    }

    #[test]
    fn test_pictographs_are_astral() {
        for unit in get_pool(Pool::Pictographs).units() {
            assert_eq!(unit.encode_utf16().count(), 2, "{:?}", unit);
        }
    }

    #[test]
    fn test_from_hint() {
        assert_eq!(PoolSelection::from_hint("h"), Some(PoolSelection::HiraganaSymbols));
        assert_eq!(PoolSelection::from_hint("Hiragana"), Some(PoolSelection::HiraganaSymbols));
        assert_eq!(PoolSelection::from_hint("kata"), Some(PoolSelection::KatakanaSymbols));
        assert_eq!(PoolSelection::from_hint("KAN"), Some(PoolSelection::Kanji));
        assert_eq!(PoolSelection::from_hint("kanji"), Some(PoolSelection::Kanji));
        assert_eq!(PoolSelection::from_hint("emoji"), Some(PoolSelection::Pictographs));
        assert_eq!(PoolSelection::from_hint("complex"), Some(PoolSelection::Complex));
        assert_eq!(PoolSelection::from_hint("k"), None);
        assert_eq!(PoolSelection::from_hint("ka"), None);
        assert_eq!(PoolSelection::from_hint("zzz"), None);
        assert_eq!(PoolSelection::from_hint(""), None);
    }

    #[test]
    fn test_selection_alphabets() {
        let hira = PoolSelection::HiraganaSymbols.alphabet();
        assert_eq!(
            hira.len(),
            get_pool(Pool::Hiragana).len() + get_pool(Pool::Symbols).len()
        );
        assert!(PoolSelection::HiraganaSymbols.contains("★"));
        assert!(PoolSelection::HiraganaSymbols.contains("ね"));
        assert!(!PoolSelection::HiraganaSymbols.contains("ネ"));

        let total: usize = Pool::ALL.iter().map(|p| get_pool(*p).len()).sum();
        assert_eq!(PoolSelection::Complex.alphabet().len(), total);
    }
}
