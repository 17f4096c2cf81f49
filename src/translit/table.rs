//! Simplified→traditional Chinese character pairs.
//!
//! Only characters whose traditional form differs are listed; everything else
//! passes through the transliterator unchanged.

/// Character pairs `(simplified, traditional)`.
pub(super) const S2T_PAIRS: &[(char, char)] = &[
    ('简', '簡'),
    ('体', '體'),
    ('语', '語'),
    ('设', '設'),
    ('备', '備'),
    ('网', '網'),
    ('络', '絡'),
    ('连', '連'),
    ('断', '斷'),
    ('开', '開'),
    ('关', '關'),
    ('钮', '鈕'),
    ('务', '務'),
    ('载', '載'),
    ('录', '錄'),
    ('认', '認'),
    ('证', '證'),
    ('码', '碼'),
    ('邮', '郵'),
    ('号', '號'),
    ('户', '戶'),
    ('订', '訂'),
    ('阅', '閱'),
    ('测', '測'),
    ('试', '試'),
    ('时', '時'),
    ('间', '間'),
    ('长', '長'),
    ('选', '選'),
    ('择', '擇'),
    ('输', '輸'),
    ('请', '請'),
    ('错', '錯'),
    ('误', '誤'),
    ('确', '確'),
    ('删', '刪'),
    ('编', '編'),
    ('辑', '輯'),
    ('复', '複'),
    ('制', '製'),
    ('粘', '貼'),
    ('贴', '貼'),
    ('启', '啟'),
    ('动', '動'),
    ('运', '運'),
    ('显', '顯'),
    ('隐', '隱'),
    ('统', '統'),
    ('国', '國'),
    ('区', '區'),
    ('亚', '亞'),
    ('欧', '歐'),
    ('际', '際'),
    ('内', '內'),
    ('绕', '繞'),
    ('过', '過'),
    ('迟', '遲'),
    ('历', '歷'),
    ('记', '記'),
    ('当', '當'),
    ('总', '總'),
    ('计', '計'),
    ('划', '劃'),
    ('费', '費'),
    ('钟', '鐘'),
    ('个', '個'),
    ('无', '無'),
    ('败', '敗'),
    ('处', '處'),
    ('标', '標'),
    ('题', '題'),
    ('详', '詳'),
    ('帮', '幫'),
    ('说', '說'),
    ('额', '額'),
    ('创', '創'),
    ('注', '註'),
    ('册', '冊'),
    ('发', '發'),
    ('约', '約'),
    ('荐', '薦'),
    ('进', '進'),
    ('链', '鏈'),
    ('协', '協'),
    ('议', '議'),
    ('账', '帳'),
    ('余', '餘'),
    ('佣', '傭'),
    ('浅', '淺'),
    ('观', '觀'),
    ('调', '調'),
    ('应', '應'),
    ('检', '檢'),
    ('仅', '僅'),
    ('优', '優'),
    ('机', '機'),
    ('线', '線'),
    ('里', '裡'),
    ('点', '點'),
    ('击', '擊'),
    ('须', '須'),
    ('数', '數'),
    ('据', '據'),
    ('来', '來'),
    ('参', '參'),
    ('资', '資'),
    ('项', '項'),
    ('类', '類'),
    ('组', '組'),
    ('单', '單'),
    ('视', '視'),
    ('图', '圖'),
    ('读', '讀'),
    ('写', '寫'),
    ('夹', '夾'),
    ('传', '傳'),
    ('导', '導'),
    ('栏', '欄'),
    ('侧', '側'),
    ('边', '邊'),
    ('顶', '頂'),
    ('样', '樣'),
    ('湾', '灣'),
    ('韩', '韓'),
    ('罗', '羅'),
    ('兰', '蘭'),
    ('义', '義'),
];
