//! Display strings per language. Keys are shared across tables; a key
//! missing from a table falls back to `EN`.

pub const EN: &[(&str, &str)] = &[
    // Navigation
    ("home", "Home"),
    ("builder", "AI Builder"),
    ("services", "Services"),
    ("demo", "Demo"),
    ("pricing", "Pricing"),
    ("about", "About"),
    ("contact", "Contact"),
    // Common
    ("connectWallet", "Connect Wallet"),
    ("language", "Language"),
    ("theme", "Theme"),
    // Hero Section
    ("heroTitle", "One Wallet Address = Gambling Empire"),
    ("heroSubtitle", "Connect your crypto wallet and launch a professional gambling platform in minutes. No KYC, no banks, no middlemen."),
    ("connectWalletStart", "Connect Wallet & Start"),
    ("watchDemo", "Watch Demo"),
    // Stats
    ("sitesLaunched", "Sites Launched"),
    ("cryptocurrenciesSupported", "Cryptocurrencies Supported"),
    ("averageDeploymentTime", "Average Deployment Time"),
    // Builder Page
    ("builderTitle", "AI Site Builder"),
    ("builderSubtitle", "Describe your vision and let AI build your perfect gambling platform"),
    // Demo Page
    ("demoTitle", "Interactive Demo"),
    ("demoSubtitle", "Experience the power of our AI-powered gambling platform builder"),
    // Pricing Page
    ("pricingTitle", "Pricing Plans"),
    ("pricingSubtitle", "Choose the perfect plan for your gambling empire"),
    // About Page
    ("aboutTitle", "About GWIN.ai"),
    ("aboutSubtitle", "The world's first wallet-first, AI-powered gambling platform builder"),
    // Contact Page
    ("contactTitle", "Contact Us"),
    ("contactSubtitle", "Get in touch with our team"),
    // Services Page
    ("servicesTitle", "Game Platform Services"),
    ("servicesSubtitle", "Discover and integrate premium gambling games for your platform"),
    ("gamePlatformHub", "Game Platform Hub"),
    ("totalGames", "Total Games"),
    ("categories", "Categories"),
    ("averageRating", "Average Rating"),
];

pub const ZH_CN: &[(&str, &str)] = &[
    // Navigation
    ("home", "首页"),
    ("builder", "AI构建器"),
    ("services", "服务"),
    ("demo", "演示"),
    ("pricing", "定价"),
    ("about", "关于"),
    ("contact", "联系我们"),
    // Common
    ("connectWallet", "连接钱包"),
    ("language", "语言"),
    ("theme", "主题"),
    // Hero Section
    ("heroTitle", "一个钱包地址 = 赌博帝国"),
    ("heroSubtitle", "连接您的加密钱包，在几分钟内启动专业的赌博平台。无需KYC，无需银行，无需中间商。"),
    ("connectWalletStart", "连接钱包并开始"),
    ("watchDemo", "观看演示"),
    // Stats
    ("sitesLaunched", "已启动站点"),
    ("cryptocurrenciesSupported", "支持的加密货币"),
    ("averageDeploymentTime", "平均部署时间"),
    // Builder Page
    ("builderTitle", "AI站点构建器"),
    ("builderSubtitle", "描述您的愿景，让AI构建您完美的赌博平台"),
    // Demo Page
    ("demoTitle", "交互式演示"),
    ("demoSubtitle", "体验我们AI驱动的赌博平台构建器的强大功能"),
    // Pricing Page
    ("pricingTitle", "定价计划"),
    ("pricingSubtitle", "为您的赌博帝国选择完美的计划"),
    // About Page
    ("aboutTitle", "关于GWIN.ai"),
    ("aboutSubtitle", "世界上第一个以钱包为先的AI驱动赌博平台构建器"),
    // Contact Page
    ("contactTitle", "联系我们"),
    ("contactSubtitle", "与我们的团队取得联系"),
    // Services Page
    ("servicesTitle", "游戏平台服务"),
    ("servicesSubtitle", "发现并集成优质赌博游戏到您的平台"),
    ("gamePlatformHub", "游戏平台中心"),
    ("totalGames", "总游戏数"),
    ("categories", "游戏分类"),
    ("averageRating", "平均评分"),
];

pub const ZH_TW: &[(&str, &str)] = &[
    // Navigation
    ("home", "首頁"),
    ("builder", "AI建構器"),
    ("services", "服務"),
    ("demo", "演示"),
    ("pricing", "定價"),
    ("about", "關於"),
    ("contact", "聯絡我們"),
    // Common
    ("connectWallet", "連接錢包"),
    ("language", "語言"),
    ("theme", "主題"),
    // Hero Section
    ("heroTitle", "一個錢包地址 = 賭博帝國"),
    ("heroSubtitle", "連接您的加密錢包，在幾分鐘內啟動專業的賭博平台。無需KYC，無需銀行，無需中間商。"),
    ("connectWalletStart", "連接錢包並開始"),
    ("watchDemo", "觀看演示"),
    // Stats
    ("sitesLaunched", "已啟動站點"),
    ("cryptocurrenciesSupported", "支持的加密貨幣"),
    ("averageDeploymentTime", "平均部署時間"),
    // Builder Page
    ("builderTitle", "AI站點建構器"),
    ("builderSubtitle", "描述您的願景，讓AI建構您完美的賭博平台"),
    // Demo Page
    ("demoTitle", "互動式演示"),
    ("demoSubtitle", "體驗我們AI驅動的賭博平台建構器的強大功能"),
    // Pricing Page
    ("pricingTitle", "定價計劃"),
    ("pricingSubtitle", "為您的賭博帝國選擇完美的計劃"),
    // About Page
    ("aboutTitle", "關於GWIN.ai"),
    ("aboutSubtitle", "世界上第一個以錢包為先的AI驅動賭博平台建構器"),
    // Contact Page
    ("contactTitle", "聯絡我們"),
    ("contactSubtitle", "與我們的團隊取得聯繫"),
    // Services Page
    ("servicesTitle", "遊戲平台服務"),
    ("servicesSubtitle", "發現並集成優質賭博遊戲到您的平台"),
    ("gamePlatformHub", "遊戲平台中心"),
    ("totalGames", "總遊戲數"),
    ("categories", "遊戲分類"),
    ("averageRating", "平均評分"),
];

pub const TH: &[(&str, &str)] = &[
    // Navigation
    ("home", "หน้าแรก"),
    ("builder", "AI Builder"),
    ("services", "บริการ"),
    ("demo", "สาธิต"),
    ("pricing", "ราคา"),
    ("about", "เกี่ยวกับ"),
    ("contact", "ติดต่อ"),
    // Common
    ("connectWallet", "เชื่อมต่อกระเป๋า"),
    ("language", "ภาษา"),
    ("theme", "ธีม"),
    // Hero Section
    ("heroTitle", "ที่อยู่กระเป๋าเดียว = จักรวรรดิการพนัน"),
    ("heroSubtitle", "เชื่อมต่อกระเป๋าเงินคริปโตของคุณและเปิดตัวแพลตฟอร์มการพนันระดับมืออาชีพในไม่กี่นาที ไม่ต้องKYC ไม่ต้องธนาคาร ไม่ต้องคนกลาง"),
    ("connectWalletStart", "เชื่อมต่อกระเป๋าและเริ่มต้น"),
    ("watchDemo", "ดูสาธิต"),
    // Stats
    ("sitesLaunched", "ไซต์ที่เปิดตัว"),
    ("cryptocurrenciesSupported", "สกุลเงินดิจิทัลที่รองรับ"),
    ("averageDeploymentTime", "เวลาการติดตั้งเฉลี่ย"),
    // Builder Page
    ("builderTitle", "AI Site Builder"),
    ("builderSubtitle", "อธิบายวิสัยทัศน์ของคุณและให้AIสร้างแพลตฟอร์มการพนันที่สมบูรณ์แบบ"),
    // Demo Page
    ("demoTitle", "สาธิตแบบโต้ตอบ"),
    ("demoSubtitle", "สัมผัสพลังของAI-powered gambling platform builder ของเรา"),
    // Pricing Page
    ("pricingTitle", "แผนราคา"),
    ("pricingSubtitle", "เลือกแผนที่สมบูรณ์แบบสำหรับจักรวรรดิการพนันของคุณ"),
    // About Page
    ("aboutTitle", "เกี่ยวกับ GWIN.ai"),
    ("aboutSubtitle", "แพลตฟอร์มสร้างแพลตฟอร์มการพนันที่ขับเคลื่อนด้วยAI และให้ความสำคัญกับกระเป๋าเงินเป็นอันดับแรกของโลก"),
    // Contact Page
    ("contactTitle", "ติดต่อเรา"),
    ("contactSubtitle", "ติดต่อทีมของเรา"),
    // Services Page
    ("servicesTitle", "บริการแพลตฟอร์มเกม"),
    ("servicesSubtitle", "ค้นพบและรวมเกมพนันคุณภาพสูงสำหรับแพลตฟอร์มของคุณ"),
    ("gamePlatformHub", "ศูนย์แพลตฟอร์มเกม"),
    ("totalGames", "เกมทั้งหมด"),
    ("categories", "หมวดหมู่"),
    ("averageRating", "คะแนนเฉลี่ย"),
];

pub const VI: &[(&str, &str)] = &[
    // Navigation
    ("home", "Trang chủ"),
    ("builder", "AI Builder"),
    ("services", "Dịch vụ"),
    ("demo", "Demo"),
    ("pricing", "Giá cả"),
    ("about", "Giới thiệu"),
    ("contact", "Liên hệ"),
    // Common
    ("connectWallet", "Kết nối ví"),
    ("language", "Ngôn ngữ"),
    ("theme", "Chủ đề"),
    // Hero Section
    ("heroTitle", "Một địa chỉ ví = Đế chế cờ bạc"),
    ("heroSubtitle", "Kết nối ví tiền điện tử của bạn và khởi chạy nền tảng cờ bạc chuyên nghiệp trong vài phút. Không cần KYC, không cần ngân hàng, không cần trung gian."),
    ("connectWalletStart", "Kết nối ví và bắt đầu"),
    ("watchDemo", "Xem demo"),
    // Stats
    ("sitesLaunched", "Trang web đã khởi chạy"),
    ("cryptocurrenciesSupported", "Tiền điện tử được hỗ trợ"),
    ("averageDeploymentTime", "Thời gian triển khai trung bình"),
    // Builder Page
    ("builderTitle", "AI Site Builder"),
    ("builderSubtitle", "Mô tả tầm nhìn của bạn và để AI xây dựng nền tảng cờ bạc hoàn hảo"),
    // Demo Page
    ("demoTitle", "Demo tương tác"),
    ("demoSubtitle", "Trải nghiệm sức mạnh của AI-powered gambling platform builder của chúng tôi"),
    // Pricing Page
    ("pricingTitle", "Gói giá"),
    ("pricingSubtitle", "Chọn gói hoàn hảo cho đế chế cờ bạc của bạn"),
    // About Page
    ("aboutTitle", "Về GWIN.ai"),
    ("aboutSubtitle", "Nền tảng xây dựng nền tảng cờ bạc được hỗ trợ bởi AI và ưu tiên ví tiền đầu tiên trên thế giới"),
    // Contact Page
    ("contactTitle", "Liên hệ chúng tôi"),
    ("contactSubtitle", "Liên hệ với đội ngũ của chúng tôi"),
    // Services Page
    ("servicesTitle", "Dịch vụ nền tảng trò chơi"),
    ("servicesSubtitle", "Khám phá và tích hợp các trò chơi cờ bạc chất lượng cao cho nền tảng của bạn"),
    ("gamePlatformHub", "Trung tâm nền tảng trò chơi"),
    ("totalGames", "Tổng số trò chơi"),
    ("categories", "Danh mục"),
    ("averageRating", "Đánh giá trung bình"),
];
