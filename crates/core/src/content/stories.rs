use super::StoryEntry;
use crate::model::Speaker::{Father, Son};

pub(super) const BUDGETING: &[StoryEntry] = &[
    (Father, "Hey, son, do you have a minute? I want to talk to you about something important."),
    (Son, "Sure, Dad. What's up?"),
    (Father, "Well, I was thinking it's time we talk about managing your income. You know, once you start earning, whether from a part-time job, allowance, or later when you start working full-time, you'll need to understand how to handle it."),
    (Son, "Oh, like budgeting and stuff?"),
    (Father, "Exactly! Think of it this way, your income is like a pie, and you've got to decide how to slice it up."),
    (Son, "That sounds interesting. What do you mean by slicing it?"),
    (Father, "Well, some of it should go towards savings, some for spending, and maybe even a little for fun. It's about balancing your needs and wants."),
    (Son, "I get that. How much should I save?"),
    (Father, "A good rule is to save about 20% of what you earn. This helps you build a safety net for the future."),
    (Son, "What if I want to buy something right now?"),
    (Father, "You can do that too! Just make sure you budget for it. If you plan ahead, you can save up for bigger purchases."),
    (Son, "Okay, so I'll keep track of what I earn and spend?"),
    (Father, "Exactly! You can use an app or a simple notebook. Tracking your income will help you see where your money goes."),
    (Son, "Got it! Thanks for the advice, Dad. I'll start budgeting right away."),
    (Father, "I'm proud of you, son. Managing money well is an important skill for life!"),
];

pub(super) const INVESTING: &[StoryEntry] = &[
    (Father, "Hey, son, have you ever thought about investing?"),
    (Son, "Investing? Like in stocks and stuff?"),
    (Father, "Exactly. Investing is a way to grow your money over time. Instead of just saving it, you can make it work for you."),
    (Son, "How does that work?"),
    (Father, "Well, when you invest in things like stocks, bonds, or mutual funds, you're essentially putting your money into companies or assets that can grow in value."),
    (Son, "So, it's kind of like a long-term savings plan?"),
    (Father, "Yes, but with the potential to earn more. The key is to start early and be patient. Over time, the value of your investments can grow."),
    (Son, "That sounds cool, but isn't it risky?"),
    (Father, "There's always some risk, but you can manage it by diversifying, spreading your investments across different areas to minimize loss."),
    (Son, "How do I know what to invest in?"),
    (Father, "You can start small, maybe with a mutual fund or an app that lets you invest in fractional shares. Always do your research and understand what you're putting your money into."),
    (Son, "Okay, I'll look into it. It sounds like a smart way to plan for the future."),
    (Father, "It is, son. The earlier you start, the more time your money has to grow."),
];

pub(super) const CREDIT_SCORE: &[StoryEntry] = &[
    (Father, "Son, have you ever heard of a credit score?"),
    (Son, "Yeah, I've heard about it, but what exactly is it?"),
    (Father, "A credit score is a number that shows how responsible you are with borrowing money. It helps lenders decide if they can trust you to pay back what you owe."),
    (Son, "Why is it so important?"),
    (Father, "Because when you want to borrow money for things like a car or a house, or even get a credit card, your credit score will determine if you get approved and what interest rates you'll pay."),
    (Son, "Okay, how do I get a good credit score?"),
    (Father, "It's all about being responsible with credit. Pay your bills on time, keep your credit card balances low, and avoid taking on too much debt."),
    (Son, "Does applying for a lot of credit hurt my score?"),
    (Father, "Yes, too many applications for credit can lower your score. It's better to apply only when you really need it."),
    (Son, "What's a good score to aim for?"),
    (Father, "A score of 700 or above is generally considered good. The higher your score, the better financial opportunities you'll have."),
    (Son, "Got it. I'll make sure to keep my score in check."),
    (Father, "Good! A strong credit score is a valuable tool in managing your financial future."),
];

pub(super) const SAVING: &[StoryEntry] = &[
    (Father, "Hey son, have you thought about building up your savings?"),
    (Son, "I've saved a little, but it's not much."),
    (Father, "That's okay. The important thing is to start. Savings are crucial for emergencies and for bigger goals you might have."),
    (Son, "What kind of emergencies are you talking about?"),
    (Father, "Unexpected expenses, like car repairs or medical bills. Having money set aside can help you avoid debt when things like that come up."),
    (Son, "How much should I have saved?"),
    (Father, "A good rule is to have at least 3 to 6 months' worth of living expenses saved up. Start small, but aim to build it up over time."),
    (Son, "Should I save for other things too?"),
    (Father, "Definitely. You can save for things like vacations, a new phone, or even long-term goals like buying a house."),
    (Son, "What's the best way to save?"),
    (Father, "Set up an automatic transfer to a savings account whenever you get paid. That way, you're saving without thinking about it."),
    (Son, "That makes sense. I'll start automating my savings."),
    (Father, "Good plan! Consistent saving is the foundation of financial security."),
];

pub(super) const SPENDING: &[StoryEntry] = &[
    (Father, "Son, have you ever thought about how you spend your money?"),
    (Son, "Yeah, I try not to spend too much, but it's hard sometimes."),
    (Father, "It can be, but managing your spending is just as important as earning and saving. You need to make sure you're spending on what truly matters."),
    (Son, "How do I know if I'm spending too much?"),
    (Father, "One way is to track your spending for a month. Write down everything you buy. You'll start to see where your money goes."),
    (Son, "That sounds helpful. But what if I want to buy something I really like?"),
    (Father, "It's okay to spend on things you enjoy, but the key is balance. Make sure you're not overspending on wants while ignoring needs."),
    (Son, "Got it. So I need to prioritize."),
    (Father, "Exactly. Make sure you cover your essential expenses like bills and groceries first. Then, if you have money left, you can treat yourself."),
    (Son, "That makes sense. I'll try to be more mindful of how I spend."),
    (Father, "Great! Smart spending habits will help you avoid unnecessary debt and build a strong financial foundation."),
];
