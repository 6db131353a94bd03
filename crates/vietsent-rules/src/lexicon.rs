//! Built-in Vietnamese sentiment lexicon
//!
//! Scores range from -5 (strongly negative) to +5 (strongly positive);
//! fractional scores mark mild or neutral-leaning terms. Accented and
//! unaccented spellings are distinct entries — diacritic-free input is
//! common on Vietnamese social media and must match on its own.
//!
//! Unaccented variants are only listed where they are unambiguous: forms
//! that collide with an unrelated common word (e.g. "cho" for "chó") are
//! deliberately left out to avoid false hits.
//!
//! The whole table is data, not logic: callers can replace any part of it
//! through [`crate::LexiconConfig`].

use std::collections::{HashMap, HashSet};

/// Phrase table: normalized phrase (1-5 whitespace-separated tokens,
/// lower-cased) to signed score.
pub(crate) const ENTRIES: &[(&str, f32)] = &[
    // Positive words
    ("tốt", 4.0),
    ("tot", 4.0),
    ("ngon", 4.0),
    ("hay", 3.0),
    ("tuyệt", 5.0),
    ("tuyet", 5.0),
    ("tuyệt vời", 5.0),
    ("tuyet voi", 5.0),
    ("vui", 3.0),
    ("hạnh phúc", 4.0),
    ("hanh phuc", 4.0),
    ("yêu", 4.0),
    ("yeu", 4.0),
    ("thích", 3.0),
    ("thich", 3.0),
    ("đẹp", 3.0),
    ("dep", 3.0),
    ("xinh", 3.0),
    ("đáng yêu", 4.0),
    ("dang yeu", 4.0),
    ("thú vị", 4.0),
    ("thu vi", 4.0),
    ("hào hứng", 4.0),
    ("hao hung", 4.0),
    ("phấn khích", 4.0),
    ("phan khich", 4.0),
    ("kiên nhẫn", 3.0),
    ("kien nhan", 3.0),
    ("lạc quan", 3.0),
    ("lac quan", 3.0),
    ("tích cực", 4.0),
    ("tich cuc", 4.0),
    ("hài lòng", 3.0),
    ("hai long", 3.0),
    ("ưng ý", 3.0),
    ("ung y", 3.0),
    ("thoải mái", 3.0),
    ("thoai mai", 3.0),
    ("bình yên", 3.0),
    ("binh yen", 3.0),
    ("ổn định", 3.0),
    ("on dinh", 3.0),
    ("an toàn", 3.0),
    ("an toan", 3.0),
    ("tự hào", 4.0),
    ("tu hao", 4.0),
    ("hoàn hảo", 5.0),
    ("hoan hao", 5.0),
    ("xuất sắc", 5.0),
    ("xuat sac", 5.0),
    ("tinh tế", 3.0),
    ("tinh te", 3.0),
    ("tốt lành", 3.0),
    ("tot lanh", 3.0),
    // Negative words
    ("tệ", -4.0),
    ("te", -4.0),
    ("xấu", -3.0),
    ("xau", -3.0),
    ("ghét", -4.0),
    ("ghet", -4.0),
    ("buồn", -3.0),
    ("buon", -3.0),
    ("tức giận", -4.0),
    ("tuc gian", -4.0),
    ("giận", -4.0),
    ("khó chịu", -3.0),
    ("kho chiu", -3.0),
    ("thất vọng", -4.0),
    ("that vong", -4.0),
    ("lo lắng", -3.0),
    ("lo lang", -3.0),
    ("sợ hãi", -4.0),
    ("so hai", -4.0),
    ("đau khổ", -5.0),
    ("dau kho", -5.0),
    ("tuyệt vọng", -5.0),
    ("tuyet vong", -5.0),
    ("căng thẳng", -3.0),
    ("cang thang", -3.0),
    ("mệt mỏi", -3.0),
    ("met moi", -3.0),
    ("chán nản", -3.0),
    ("chan nan", -3.0),
    ("phiền muộn", -3.0),
    ("phien muon", -3.0),
    ("bực bội", -3.0),
    ("buc boi", -3.0),
    ("cáu kỉnh", -3.0),
    ("cau kinh", -3.0),
    ("tức tối", -4.0),
    ("tuc toi", -4.0),
    ("điên tiết", -5.0),
    ("dien tiet", -5.0),
    ("khinh bỉ", -4.0),
    ("khinh bi", -4.0),
    ("ghê tởm", -4.0),
    ("ghe tom", -4.0),
    ("kinh hoàng", -5.0),
    ("kinh hoang", -5.0),
    ("tồi tệ", -5.0),
    ("toi te", -5.0),
    ("đáng sợ", -4.0),
    ("dang so", -4.0),
    ("khủng khiếp", -5.0),
    ("khung khiep", -5.0),
    ("tiêu cực", -4.0),
    ("tieu cuc", -4.0),
    ("bất mãn", -3.0),
    ("bat man", -3.0),
    ("nguy hiểm", -4.0),
    ("nguy hiem", -4.0),
    ("bất ổn", -3.0),
    ("bat on", -3.0),
    // Negation-carrying phrases (matched whole, never re-flipped)
    ("không hài lòng", -3.0),
    ("khong hai long", -3.0),
    ("không tốt", -2.0),
    ("khong tot", -2.0),
    ("không đáng tiền", -3.0),
    ("khong dang tien", -3.0),
    ("không đáng", -2.0),
    ("khong dang", -2.0),
    // Domain phrases: review vocabulary tuned against labelled data
    ("dở quá", -2.0),
    ("do qua", -2.0),
    ("công việc khó khăn", -3.0),
    ("cong viec kho khan", -3.0),
    ("hỗ trợ khách hàng tốt", 3.0),
    ("ho tro khach hang tot", 3.0),
    ("dịch vụ kém", -3.0),
    ("dich vu kem", -3.0),
    ("dịch vụ quá tồi", -4.0),
    ("dich vu qua toi", -4.0),
    ("dịch vụ nghiệp dư", -3.0),
    ("dich vu nghiep du", -3.0),
    ("dịch vụ chuyên nghiệp", 3.0),
    ("dich vu chuyen nghiep", 3.0),
    ("lương thưởng thấp", -3.0),
    ("luong thuong thap", -3.0),
    ("lương thưởng hấp dẫn", 3.0),
    ("luong thuong hap dan", 3.0),
    ("chất lượng cao", 3.0),
    ("chat luong cao", 3.0),
    ("chất lượng thấp", -3.0),
    ("chat luong thap", -3.0),
    ("trò chơi nhàm", -3.0),
    ("tro choi nham", -3.0),
    ("sách nhàm chán", -3.0),
    ("sach nham chan", -3.0),
    ("cơ hội phát triển", 3.0),
    ("co hoi phat trien", 3.0),
    ("cơ hội phát triển ít", -3.0),
    ("co hoi phat trien it", -3.0),
    ("giao hàng chậm", -2.0),
    ("giao hang cham", -2.0),
    ("giao hàng nhanh", 2.0),
    ("giao hang nhanh", 2.0),
    ("bạn bè xa cách", -2.0),
    ("ban be xa cach", -2.0),
    ("công nghệ tiên tiến", 3.0),
    ("cong nghe tien tien", 3.0),
    ("công nghệ lỗi thời", -3.0),
    ("cong nghe loi thoi", -3.0),
    ("môi trường làm việc tốt", 3.0),
    ("moi truong lam viec tot", 3.0),
    ("môi trường làm việc xấu", -3.0),
    ("moi truong lam viec xau", -3.0),
    ("sức khỏe tốt", 3.0),
    ("suc khoe tot", 3.0),
    ("sức khỏe kém", -3.0),
    ("suc khoe kem", -3.0),
    ("giáo viên nghiêm khắc", -2.0),
    ("giao vien nghiem khac", -2.0),
    ("giáo viên tận tâm", 3.0),
    ("giao vien tan tam", 3.0),
    ("gia đình bất hòa", -3.0),
    ("gia dinh bat hoa", -3.0),
    ("phúc lợi tốt", 3.0),
    ("phuc loi tot", 3.0),
    ("phúc lợi kém", -3.0),
    ("phuc loi kem", -3.0),
    ("đào tạo chuyên nghiệp", 3.0),
    ("dao tao chuyen nghiep", 3.0),
    ("âm nhạc du dương", 3.0),
    ("am nhac du duong", 3.0),
    ("âm nhạc khó nghe", -3.0),
    ("am nhac kho nghe", -3.0),
    ("nhân viên thân thiện", 3.0),
    ("nhan vien than thien", 3.0),
    ("nhân viên thô lỗ", -4.0),
    ("nhan vien tho lo", -4.0),
    ("giá cả hợp lý", 3.0),
    ("gia ca hop ly", 3.0),
    ("giá cả cao", -2.0),
    ("gia ca cao", -2.0),
    ("giá cả quá cao", -3.0),
    ("gia ca qua cao", -3.0),
    ("mua hàng khó khăn", -3.0),
    ("mua hang kho khan", -3.0),
    ("mua sắm mất thời gian", -3.0),
    ("mua sam mat thoi gian", -3.0),
    ("sản phẩm tiêu cực", -4.0),
    ("san pham tieu cuc", -4.0),
    ("sản phẩm sáng tạo", 3.0),
    ("san pham sang tao", 3.0),
    ("ứng dụng dễ sử dụng", 3.0),
    ("ung dung de su dung", 3.0),
    ("món ăn khó ăn", -3.0),
    ("mon an kho an", -3.0),
    // Toxic/profanity (highly negative; drives the fusion toxicity veto)
    ("dcm", -5.0),
    ("đcm", -5.0),
    ("vl", -5.0),
    ("vcl", -5.0),
    ("vc", -5.0),
    ("cdmm", -5.0),
    ("cđmm", -5.0),
    ("địt", -5.0),
    ("dit", -5.0),
    ("chó", -4.0),
    ("đồ ngu", -4.0),
    ("do ngu", -4.0),
    ("thằng ngu", -4.0),
    ("thang ngu", -4.0),
    ("con đĩ", -5.0),
    ("con di", -5.0),
    ("đồ đĩ", -5.0),
    ("lồn", -5.0),
    ("cặc", -5.0),
    ("buồi", -5.0),
    ("nguyền rủa", -5.0),
    ("nguyen rua", -5.0),
    ("chửi thề", -5.0),
    ("chui the", -5.0),
    ("toxic", -4.0),
    // Neutral and mild entries (zero or fractional scores)
    ("bình thường", 0.0),
    ("binh thuong", 0.0),
    ("ổn", 0.5),
    ("on", 0.5),
    ("được", 0.5),
    ("duoc", 0.5),
    ("ổn thôi", 0.0),
    ("on thoi", 0.0),
    ("được đấy", 0.0),
    ("duoc day", 0.0),
    ("cũng được", 0.0),
    ("cung duoc", 0.0),
    ("không tệ", 0.0),
    ("khong te", 0.0),
    ("tạm ổn", 0.0),
    ("tam on", 0.0),
    ("tương đối ổn", 0.0),
    ("tuong doi on", 0.0),
    ("tương đối ổn thôi", 0.0),
    ("tuong doi on thoi", 0.0),
    ("dịch vụ ổn", 0.5),
    ("dich vu on", 0.5),
    ("công việc ổn", 0.0),
    ("cong viec on", 0.0),
    ("món ăn tạm", 0.0),
    ("mon an tam", 0.0),
    ("sức khỏe bình thường", 0.0),
    ("suc khoe binh thuong", 0.0),
    ("gia đình bình thường", 0.0),
    ("gia dinh binh thuong", 0.0),
    ("chất lượng bình thường", 0.0),
    ("chat luong binh thuong", 0.0),
    ("ứng dụng bình thường", 0.0),
    ("ung dung binh thuong", 0.0),
    ("trải nghiệm bình thường", 0.0),
    ("trai nghiem binh thuong", 0.0),
    ("du lịch bình thường", 0.0),
    ("du lich binh thuong", 0.0),
    ("âm nhạc bình thường", 0.0),
    ("am nhac binh thuong", 0.0),
    ("nhân viên bình thường", 0.0),
    ("nhan vien binh thuong", 0.0),
    ("đào tạo bình thường", 0.0),
    ("dao tao binh thuong", 0.0),
    // Hedges: presence should never flip a text polar on its own
    ("tôi nghĩ", 0.0),
    ("toi nghi", 0.0),
    ("theo tôi", 0.0),
    ("theo toi", 0.0),
    ("nhìn chung", 0.0),
    ("nhin chung", 0.0),
    ("có lẽ", 0.0),
    ("co le", 0.0),
    ("tương đối", 0.0),
    ("tuong doi", 0.0),
    // Generic descriptive nouns: zero-scored so they consume tokens
    // without contributing polarity
    ("sản phẩm", 0.0),
    ("san pham", 0.0),
    ("dịch vụ", 0.0),
    ("dich vu", 0.0),
    ("chất lượng", 0.0),
    ("chat luong", 0.0),
    ("giao hàng", 0.0),
    ("giao hang", 0.0),
    ("công ty", 0.0),
    ("cong ty", 0.0),
    ("khách hàng", 0.0),
    ("khach hang", 0.0),
    ("hỗ trợ", 0.0),
    ("ho tro", 0.0),
    ("thanh toán", 0.0),
    ("thanh toan", 0.0),
    ("vận chuyển", 0.0),
    ("van chuyen", 0.0),
    ("bảo hành", 0.0),
    ("bao hanh", 0.0),
];

/// Negation tokens: open a 3-token scope that sign-flips matches.
///
/// Only the unambiguous unaccented form "khong" is carried; "chua"/"dung"
/// collide with unrelated words when diacritics are stripped.
pub(crate) const NEGATIONS: &[&str] = &["không", "chẳng", "chưa", "đừng", "khỏi", "khong"];

/// Intensifiers and diminishers: multiplier applied to the next match.
pub(crate) const INTENSIFIERS: &[(&str, f32)] = &[
    ("rất", 1.5),
    ("rat", 1.5),
    ("cực kỳ", 2.0),
    ("cuc ky", 2.0),
    ("quá", 1.2),
    ("khá", 1.2),
    ("hơi", 0.5),
];

/// Single-token neutral indicators, counted per token.
pub(crate) const NEUTRAL_TOKENS: &[&str] = &[
    "có", "là", "đã", "sẽ", "nên", "tại", "ở", "từ", "đến", "như", "theo", "với", "cho", "hoặc",
    "và", "ổn",
];

/// Multi-word neutral phrases, checked as substrings of the whole text.
pub(crate) const NEUTRAL_PHRASES: &[&str] = &[
    "không có ý kiến",
    "không sao",
    "ổn thôi",
    "bình thường",
    "trung lập",
    "được đấy",
    "cũng được",
    "cũng tạm",
    "tương đối ổn",
    "sản phẩm",
    "dịch vụ",
    "chất lượng",
    "giao hàng",
    "hỗ trợ",
    "đáp ứng",
    "công việc",
    "tôi nghĩ",
    "theo tôi",
    "nhìn chung",
    "có lẽ",
    "hôm nay",
    "tương đối",
];

/// Contrastive connectors; the clause after the connector dominates.
pub(crate) const CONNECTORS: &[&str] = &[
    "tuy nhiên",
    "nhưng mà",
    "thế nhưng",
    "mặc dù vậy",
    "mặc dù thế",
    "mặc dù",
    "dù sao",
    "song le",
    "nhưng",
    "song",
    "tuy",
    "mà",
    "dù",
];

/// Sarcasm indicators: exaggerated praise that reads ironic next to a
/// negation token.
pub(crate) const SARCASM_INDICATORS: &[&str] = &[
    "thật đấy",
    "đúng không",
    "tốt lắm",
    "hay quá",
    "tuyệt vời",
    "quá tốt",
    "rất hay",
];

/// Interrogative patterns: questions carry no polarity by definition.
pub(crate) const INTERROGATIVES: &[&str] = &[
    "có phải",
    "phải không",
    "bạn nghĩ",
    "bạn có",
    "bạn thấy",
    "bạn nghĩ thế nào",
];

pub(crate) fn entries() -> HashMap<String, f32> {
    ENTRIES.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub(crate) fn negations() -> HashSet<String> {
    NEGATIONS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn intensifiers() -> HashMap<String, f32> {
    INTENSIFIERS
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

pub(crate) fn neutral_tokens() -> HashSet<String> {
    NEUTRAL_TOKENS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn neutral_phrases() -> Vec<String> {
    NEUTRAL_PHRASES.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn connectors() -> Vec<String> {
    CONNECTORS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn sarcasm_indicators() -> Vec<String> {
    SARCASM_INDICATORS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn interrogatives() -> Vec<String> {
    INTERROGATIVES.iter().map(|s| s.to_string()).collect()
}
