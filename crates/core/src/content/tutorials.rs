use super::SectionEntry;

pub(super) const BUDGETING: &[SectionEntry] = &[
    SectionEntry {
        title: "Income Management",
        content: "Income management involves understanding your sources of income and ensuring your spending stays below your income. Regularly track your earnings and plan how to allocate them effectively. Set priorities for expenses and allocate parts of your income to different categories such as saving, spending, and investing.",
    },
    SectionEntry {
        title: "Expense Categorization",
        content: "Categorizing expenses is essential for financial awareness and control. Common categories include food, rent, transportation, and entertainment. Tracking expenses by category allows for better decisions about saving and spending. You can also spot patterns where small, frequent expenses, like Starbucks runs, accumulate over time, and take steps to reduce those costs.",
    },
    SectionEntry {
        title: "Fixed vs. Variable Expenses",
        content: "Fixed expenses are expenses that remain the same each month and are consistent, recurring costs. Examples include rent payments, car payments, and subscriptions. Since they are predictable, fixed expenses are easier to plan for and should be prioritized in your budget. Variable expenses fluctuate each month and require careful monitoring to prevent overspending.",
    },
    SectionEntry {
        title: "Savings Allocation",
        content: "Savings allocation involves determining how much money should be set aside for future goals. This includes establishing an emergency fund, saving for short-term purchases, and planning for long-term investments. Assessing your current financial situation will help determine the appropriate amounts to save.",
    },
    SectionEntry {
        title: "Debt Management",
        content: "Debt management is about keeping your debt under control and working towards paying it off. Focus on high-interest debts first, like credit cards. Consider strategies such as the snowball method, where you pay off smaller debts first, or the avalanche method, where you prioritize debts with higher interest rates.",
    },
    SectionEntry {
        title: "Emergency Fund Planning",
        content: "Emergency funds are savings set aside to cover unexpected expenses or loss of income. Aim for 3-6 months' worth of living expenses. This fund helps reduce financial stress and provides a safety net during difficult times.",
    },
];

pub(super) const INVESTING: &[SectionEntry] = &[
    SectionEntry {
        title: "Investment Types",
        content: "Investment types vary, including stocks, bonds, mutual funds, and real estate. Each has different risk levels and potential returns. It's essential to understand these types before investing your money.",
    },
    SectionEntry {
        title: "Risk Tolerance Assessment",
        content: "Assessing your risk tolerance helps determine how much risk you can handle in your investments. Higher-risk investments may yield higher returns but also come with more volatility.",
    },
    SectionEntry {
        title: "Time Horizon Planning",
        content: "Time horizon planning refers to how long you plan to invest before needing access to the money. Longer time horizons generally allow for more aggressive investment strategies, while shorter time frames might necessitate more conservative approaches.",
    },
    SectionEntry {
        title: "Portfolio Diversification",
        content: "Portfolio diversification involves spreading your investments across different asset classes to reduce risk. It can help protect your portfolio from significant losses during market downturns.",
    },
    SectionEntry {
        title: "Tracking and Rebalancing",
        content: "Tracking and rebalancing your portfolio ensures it aligns with your investment goals and risk tolerance. Regularly reviewing your investments allows you to adjust your strategy as needed.",
    },
];

pub(super) const CREDIT_SCORE: &[SectionEntry] = &[
    SectionEntry {
        title: "Benefit of a Good Credit Score",
        content: "A good credit score can save you money through lower interest rates on loans and credit cards. It also helps in securing rental agreements and job opportunities. Additionally, a strong credit score can lead to better insurance rates and higher chances of loan approval.",
    },
    SectionEntry {
        title: "Building Credit",
        content: "Building credit involves using credit responsibly. Start with a secured credit card or a small loan, and ensure you make payments on time to establish a positive credit history. Over time, this will demonstrate to lenders that you can manage credit effectively.",
    },
    SectionEntry {
        title: "Maintaining a Credit Score",
        content: "Maintaining a good credit score requires consistent on-time payments, keeping credit utilization low, and avoiding unnecessary credit inquiries. Regularly reviewing your credit report to check for errors or discrepancies is also important in sustaining a healthy score.",
    },
    SectionEntry {
        title: "Improving a Low Credit Score",
        content: "Improving a low credit score can be achieved by paying off debts, ensuring timely payments, and avoiding new debt until the score improves.",
    },
];

pub(super) const SAVING: &[SectionEntry] = &[
    SectionEntry {
        title: "Types of Savings Accounts",
        content: "Types of savings accounts include traditional savings, high-yield savings, and money market accounts. Each offers different interest rates and accessibility features.",
    },
    SectionEntry {
        title: "Creating a Savings Plan",
        content: "Creating a savings plan involves setting clear goals and determining how much to save each month. Automating savings through direct deposit can help you stay on track.",
    },
    SectionEntry {
        title: "Short Term vs. Long Term Savings",
        content: "Short-term savings are intended for immediate needs, while long-term savings focus on future goals like retirement. Understanding your goals will guide your saving strategy.",
    },
    SectionEntry {
        title: "Compound and Simple Interest",
        content: "Compound interest can significantly increase your savings over time. The sooner you start saving, the more you benefit from compound interest.",
    },
];

pub(super) const SPENDING: &[SectionEntry] = &[
    SectionEntry {
        title: "Tracking Spending",
        content: "Tracking your spending is essential for maintaining financial health. Use apps or spreadsheets to log expenses, helping you identify spending patterns.",
    },
    SectionEntry {
        title: "Needs vs. Wants",
        content: "Differentiating needs from wants helps prioritize spending. Focus on necessities first before allocating funds for wants.",
    },
    SectionEntry {
        title: "Spending Limits",
        content: "Setting spending limits helps avoid overspending and ensures you stay within budget. Adjust your budget as necessary based on spending habits.",
    },
    SectionEntry {
        title: "Impulse Purchases",
        content: "Impulse purchases can derail budgets. Implement strategies like the 24-hour rule to delay purchases and ensure they align with your financial goals.",
    },
];
