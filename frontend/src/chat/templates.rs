use rand::Rng;

/// Which canned reply a prompt gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteKind {
    Casino,
    Sports,
    Poker,
    Custom,
}

// Checked in order; the first keyword found anywhere in the prompt wins.
const KEYWORDS: &[(&str, SiteKind)] = &[
    ("casino", SiteKind::Casino),
    ("slots", SiteKind::Casino),
    ("sports", SiteKind::Sports),
    ("betting", SiteKind::Sports),
    ("poker", SiteKind::Poker),
];

impl SiteKind {
    pub fn classify(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| prompt.contains(keyword))
            .map_or(SiteKind::Custom, |(_, kind)| *kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteKind::Casino => "casino",
            SiteKind::Sports => "sports",
            SiteKind::Poker => "poker",
            SiteKind::Custom => "custom",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub kind: SiteKind,
    pub text: String,
    /// Monthly revenue figure quoted in `text`, in dollars.
    pub estimated_revenue: u32,
}

pub fn compose<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> Reply {
    let kind = SiteKind::classify(prompt);
    let (text, estimated_revenue) = match kind {
        SiteKind::Casino => {
            let slots: u32 = rng.gen_range(10..30);
            let revenue = rng.gen_range(3_000..=5_000);
            (
                format!(
                    "🎰 Building your crypto casino empire!\n\n\
                     I've created a professional casino with:\n\
                     • 🎲 {} slot games\n\
                     • 🃏 Poker tables and blackjack\n\
                     • 💰 ETH, USDC, and BTC payments\n\
                     • 🎨 Dark crypto theme\n\n\
                     Estimated monthly revenue: ${}\n\n\
                     Ready to deploy this to Vercel?",
                    slots, revenue
                ),
                revenue,
            )
        }
        SiteKind::Sports => {
            let revenue = rng.gen_range(5_000..=8_000);
            (
                format!(
                    "🏈 Creating your sports betting platform!\n\n\
                     Your site includes:\n\
                     • ⚽ Live sports betting\n\
                     • 📊 Real-time odds\n\
                     • 💳 Crypto deposits/withdrawals\n\
                     • 📱 Mobile optimized\n\n\
                     Potential revenue: ${}/month\n\n\
                     Want me to add more sports or customize the design?",
                    revenue
                ),
                revenue,
            )
        }
        SiteKind::Poker => {
            let revenue = rng.gen_range(4_000..=6_500);
            (
                format!(
                    "🃏 Setting up your poker room!\n\n\
                     Features included:\n\
                     • 🎯 Texas Hold'em tables\n\
                     • 🏆 Tournament system\n\
                     • 💎 NFT rewards for winners\n\
                     • 🌐 Multi-table support\n\n\
                     Projected earnings: ${}/month\n\n\
                     Shall I proceed with the deployment?",
                    revenue
                ),
                revenue,
            )
        }
        SiteKind::Custom => {
            let revenue = rng.gen_range(2_000..=6_000);
            (
                format!(
                    "🚀 I understand you want: \"{}\"\n\n\
                     I'll create a custom gambling platform tailored to your vision. This includes:\n\
                     • 🎨 Unique design theme\n\
                     • 🎮 Customized game selection\n\
                     • 💰 Optimized payment systems\n\
                     • 📈 Revenue-maximizing features\n\n\
                     Expected monthly revenue: ${}\n\n\
                     Ready to see your site come to life?",
                    prompt, revenue
                ),
                revenue,
            )
        }
    };
    Reply {
        kind,
        text,
        estimated_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn casino_keywords() {
        assert_eq!(SiteKind::classify("A crypto CASINO please"), SiteKind::Casino);
        assert_eq!(SiteKind::classify("lots of Slots"), SiteKind::Casino);
    }

    #[test]
    fn sports_keywords() {
        assert_eq!(SiteKind::classify("Sports betting platform"), SiteKind::Sports);
        assert_eq!(SiteKind::classify("horse BETTING"), SiteKind::Sports);
    }

    #[test]
    fn earlier_keyword_wins() {
        assert_eq!(SiteKind::classify("sports and casino"), SiteKind::Casino);
        assert_eq!(SiteKind::classify("poker with betting"), SiteKind::Sports);
        assert_eq!(SiteKind::classify("Poker room with tournaments"), SiteKind::Poker);
    }

    #[test]
    fn anything_else_is_custom() {
        assert_eq!(SiteKind::classify("a lottery for my friends"), SiteKind::Custom);
        assert_eq!(SiteKind::classify(""), SiteKind::Custom);
    }

    #[test]
    fn casino_reply_quotes_its_revenue() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let reply = compose("casino", &mut rng);
            assert!(reply.text.starts_with("🎰 Building your crypto casino empire!"));
            assert!((3_000..=5_000).contains(&reply.estimated_revenue));
            assert!(reply
                .text
                .contains(&format!("Estimated monthly revenue: ${}", reply.estimated_revenue)));
        }
    }

    #[test]
    fn sports_reply_uses_sports_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let reply = compose("I want betting", &mut rng);
            assert_eq!(reply.kind, SiteKind::Sports);
            assert!(reply.text.starts_with("🏈 Creating your sports betting platform!"));
            assert!((5_000..=8_000).contains(&reply.estimated_revenue));
        }
    }

    #[test]
    fn custom_reply_echoes_prompt() {
        let mut rng = StdRng::seed_from_u64(3);
        let reply = compose("A lottery with weekly draws", &mut rng);
        assert_eq!(reply.kind, SiteKind::Custom);
        assert!(reply
            .text
            .starts_with("🚀 I understand you want: \"A lottery with weekly draws\""));
        assert!((2_000..=6_000).contains(&reply.estimated_revenue));
    }
}
