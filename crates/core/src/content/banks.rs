use super::BankEntry;

pub(super) const BUDGETING: &[BankEntry] = &[
    BankEntry {
        text: "What is the first step in creating a budget?",
        choices: [
            "Tracking your spending.",
            "Setting financial goals.",
            "Choosing a budgeting method.",
            "Calculating your net worth.",
        ],
        correct: 1,
        explanation: "The first step in creating a budget is to set financial goals, as this provides direction for how to allocate funds.",
    },
    BankEntry {
        text: "What is a common budgeting method?",
        choices: [
            "The 50/30/20 rule.",
            "Spending everything you earn.",
            "Ignoring your expenses.",
            "Budgeting by intuition.",
        ],
        correct: 0,
        explanation: "The 50/30/20 rule suggests allocating 50% of income to needs, 30% to wants, and 20% to savings.",
    },
    BankEntry {
        text: "Why is it important to track your spending?",
        choices: [
            "To see where you can overspend.",
            "To understand your spending habits.",
            "To find ways to spend more.",
            "To avoid making a budget.",
        ],
        correct: 1,
        explanation: "Tracking your spending helps you understand where your money goes, allowing for better budgeting decisions.",
    },
    BankEntry {
        text: "What is the purpose of an emergency fund?",
        choices: [
            "To cover unexpected expenses.",
            "To buy luxury items.",
            "To pay off debts.",
            "To invest in stocks.",
        ],
        correct: 0,
        explanation: "An emergency fund is designed to cover unforeseen expenses, providing financial security.",
    },
    BankEntry {
        text: "How often should you review your budget?",
        choices: [
            "Once a year.",
            "Every month.",
            "Never.",
            "Only when you overspend.",
        ],
        correct: 1,
        explanation: "Regular monthly reviews of your budget help you stay on track and adjust as necessary.",
    },
    BankEntry {
        text: "What is discretionary spending?",
        choices: [
            "Necessary expenses like rent.",
            "Non-essential expenses like entertainment.",
            "Fixed expenses like insurance.",
            "Savings contributions.",
        ],
        correct: 1,
        explanation: "Discretionary spending refers to non-essential expenses, such as dining out or entertainment.",
    },
    BankEntry {
        text: "Which of the following is a benefit of budgeting?",
        choices: [
            "More financial stress.",
            "Increased impulse buying.",
            "Better control over finances.",
            "Less awareness of spending.",
        ],
        correct: 2,
        explanation: "Budgeting helps you take control of your finances and reduce stress by clearly defining where your money goes.",
    },
    BankEntry {
        text: "What should you do if you exceed your budget?",
        choices: [
            "Ignore it.",
            "Adjust your budget or spending.",
            "Increase your spending.",
            "Stop budgeting altogether.",
        ],
        correct: 1,
        explanation: "If you exceed your budget, it's important to analyze the reasons and adjust your spending or budget accordingly.",
    },
];

pub(super) const INVESTING: &[BankEntry] = &[
    BankEntry {
        text: "What is a key factor in determining your investment strategy?",
        choices: [
            "The level of risk an investor is willing to take.",
            "The amount of money needed to invest.",
            "The potential return of an investment.",
            "The duration of an investment.",
        ],
        correct: 0,
        explanation: "Risk tolerance refers to the level of risk an investor is comfortable taking with their investments.",
    },
    BankEntry {
        text: "What does diversification in investing mean?",
        choices: [
            "Investing in only one asset.",
            "Spreading investments across various assets to reduce risk.",
            "Investing only in stocks.",
            "Concentrating funds in a single market.",
        ],
        correct: 1,
        explanation: "Diversification involves spreading investments across different assets to mitigate risk.",
    },
    BankEntry {
        text: "Which of the following is considered a safer investment?",
        choices: [
            "Stocks",
            "Real estate",
            "Bonds",
            "Cryptocurrency",
        ],
        correct: 2,
        explanation: "Bonds are generally considered safer than stocks and cryptocurrencies, providing fixed interest over time.",
    },
    BankEntry {
        text: "What is a stock?",
        choices: [
            "A loan made to a corporation.",
            "A share in the ownership of a company.",
            "A type of bond.",
            "An investment that guarantees returns.",
        ],
        correct: 1,
        explanation: "A stock represents a share in the ownership of a company and its assets.",
    },
    BankEntry {
        text: "What is the purpose of a mutual fund?",
        choices: [
            "To pool money from multiple investors to invest in a diversified portfolio.",
            "To provide loans to individuals.",
            "To save money for retirement only.",
            "To invest in a single stock.",
        ],
        correct: 0,
        explanation: "A mutual fund collects money from multiple investors to invest in a diversified portfolio of stocks and bonds.",
    },
    BankEntry {
        text: "What is compound interest?",
        choices: [
            "Interest earned on the initial deposit only.",
            "Interest earned on both the principal and previously earned interest.",
            "Interest applied once a year.",
            "A fixed percentage rate of return.",
        ],
        correct: 1,
        explanation: "Compound interest allows you to earn interest on both your principal and any previously earned interest.",
    },
    BankEntry {
        text: "What is a 401(k)?",
        choices: [
            "A type of investment in real estate.",
            "A retirement savings plan that allows workers to save a portion of their paycheck.",
            "An insurance policy.",
            "A mutual fund.",
        ],
        correct: 1,
        explanation: "A 401(k) is a retirement savings plan allowing employees to save and invest part of their paycheck for retirement.",
    },
    BankEntry {
        text: "Which is a characteristic of a high-yield savings account?",
        choices: [
            "Higher interest rates compared to traditional savings accounts.",
            "No minimum balance requirements.",
            "Limited access to funds.",
            "Only available through physical banks.",
        ],
        correct: 0,
        explanation: "High-yield savings accounts offer better interest rates than traditional accounts, encouraging savings growth.",
    },
];

pub(super) const CREDIT_SCORE: &[BankEntry] = &[
    BankEntry {
        text: "What is a credit score?",
        choices: [
            "A number that represents your income level.",
            "A number that reflects your creditworthiness.",
            "The amount of debt you owe.",
            "A score that shows how much credit you can buy.",
        ],
        correct: 1,
        explanation: "A credit score is a numerical expression of your creditworthiness, used by lenders to assess risk.",
    },
    BankEntry {
        text: "Which factor does NOT influence your credit score?",
        choices: [
            "Payment history",
            "Credit utilization",
            "Income level",
            "Length of credit history",
        ],
        correct: 2,
        explanation: "Income level does not directly influence your credit score; it focuses on how you manage debt.",
    },
    BankEntry {
        text: "What is the credit utilization ratio?",
        choices: [
            "The amount of available credit you use.",
            "The number of credit accounts you have.",
            "The total debt you owe.",
            "The average age of your credit accounts.",
        ],
        correct: 0,
        explanation: "Credit utilization ratio measures how much of your available credit you're using, impacting your credit score.",
    },
    BankEntry {
        text: "How can you improve your credit score?",
        choices: [
            "By opening multiple new credit accounts at once.",
            "By making payments on time and reducing debt.",
            "By ignoring your credit report.",
            "By taking out a large loan.",
        ],
        correct: 1,
        explanation: "Improving your credit score involves making timely payments and reducing overall debt.",
    },
    BankEntry {
        text: "What is considered a good credit score range?",
        choices: [
            "300-579",
            "580-669",
            "670-739",
            "740 and above",
        ],
        correct: 3,
        explanation: "A credit score of 740 or above is typically considered excellent, indicating strong credit management.",
    },
    BankEntry {
        text: "What happens if you have a low credit score?",
        choices: [
            "You will always be denied credit.",
            "You may face higher interest rates and difficulty obtaining loans.",
            "You won't be able to rent an apartment.",
            "You will not be able to get a credit card.",
        ],
        correct: 1,
        explanation: "A low credit score can lead to higher interest rates and make it difficult to obtain loans, as lenders view you as a higher risk.",
    },
    BankEntry {
        text: "How often should you check your credit report?",
        choices: [
            "Once a year.",
            "Once every few years.",
            "Only when applying for a loan.",
            "Every month.",
        ],
        correct: 0,
        explanation: "You should check your credit report at least once a year to ensure accuracy and identify any potential issues. A credit report is a statement that has information about your credit activity and current credit situation such as loan paying history and the status of your credit accounts.",
    },
    BankEntry {
        text: "Which of the following actions can negatively impact your credit score?",
        choices: [
            "Paying your bills on time.",
            "Using credit cards responsibly.",
            "Applying for multiple loans in a short time.",
            "Keeping old credit accounts open.",
        ],
        correct: 2,
        explanation: "Applying for multiple loans in a short period can indicate to lenders that you may be in financial trouble, potentially lowering your score.",
    },
];

pub(super) const SAVING: &[BankEntry] = &[
    BankEntry {
        text: "What is the purpose of an emergency fund?",
        choices: [
            "To pay for everyday expenses.",
            "To save for retirement.",
            "To cover unexpected expenses.",
            "To invest in stocks.",
        ],
        correct: 2,
        explanation: "An emergency fund is specifically set aside to cover unforeseen expenses, such as medical emergencies or car repairs.",
    },
    BankEntry {
        text: "Which of the following is an example of a good savings goal",
        choices: [
            "Saving enough for a vacation next year.",
            "Spending all income each month.",
            "Not saving at all.",
            "Using savings to fund non-essential purchases.",
        ],
        correct: 0,
        explanation: "Setting a savings goal, like saving for a vacation, encourages discipline and helps you plan for future expenses.",
    },
    BankEntry {
        text: "What does 'paying yourself first' mean?",
        choices: [
            "Paying all your bills before anything else.",
            "Saving a portion of your income before spending on anything else.",
            "Only saving after all expenses are covered.",
            "Spending your savings as soon as you receive them.",
        ],
        correct: 1,
        explanation: "'Paying yourself first' means setting aside savings before any other expenses, ensuring that you prioritize your financial health.",
    },
    BankEntry {
        text: "Which is NOT a good savings strategy?",
        choices: [
            "Setting specific savings goals.",
            "Automating your savings.",
            "Spending all your disposable income.",
            "Tracking your savings progress.",
        ],
        correct: 2,
        explanation: "Spending all disposable income contradicts saving; effective strategies include setting goals and tracking progress.",
    },
    BankEntry {
        text: "What is a high-yield savings account?",
        choices: [
            "An account with high fees.",
            "An account that offers higher interest rates than regular savings accounts.",
            "An account with a fixed interest rate.",
            "An account with no withdrawal limits.",
        ],
        correct: 1,
        explanation: "High-yield savings accounts offer better interest rates than traditional accounts, helping your savings grow faster.",
    },
    BankEntry {
        text: "Why is it important to review your savings plan periodically?",
        choices: [
            "To make unnecessary changes.",
            "To ensure it still aligns with your financial goals.",
            "To increase your spending.",
            "To avoid saving.",
        ],
        correct: 1,
        explanation: "Regularly reviewing your savings plan ensures it remains aligned with your evolving financial goals and priorities.",
    },
    BankEntry {
        text: "What is a common mistake when saving money?",
        choices: [
            "Setting realistic goals.",
            "Not having an emergency fund.",
            "Automating savings.",
            "Tracking expenses.",
        ],
        correct: 1,
        explanation: "A common mistake is failing to have an emergency fund, which can lead to financial stress during unexpected events.",
    },
    BankEntry {
        text: "How can interest help your savings grow?",
        choices: [
            "It adds to your total savings over time.",
            "It decreases the amount you save.",
            "It has no effect on savings.",
            "It only applies to checking accounts.",
        ],
        correct: 0,
        explanation: "Interest earns you additional money on your savings, allowing your funds to grow over time through compounding.",
    },
];

pub(super) const SPENDING: &[BankEntry] = &[
    BankEntry {
        text: "What is the difference between needs and wants?",
        choices: [
            "Needs are essential; wants are non-essential.",
            "Needs are what you want; wants are what you need.",
            "Both are the same.",
            "Wants are more important than needs.",
        ],
        correct: 0,
        explanation: "Needs are essential for survival, like food and shelter, while wants are things that enhance life but are not necessary.",
    },
    BankEntry {
        text: "What is a spending limit?",
        choices: [
            "The maximum amount you can earn.",
            "A set amount you allocate for different categories of expenses.",
            "The amount you can spend without a budget.",
            "A limit on how much you can save.",
        ],
        correct: 1,
        explanation: "A spending limit is a predetermined amount allocated for various expense categories, helping you manage your finances.",
    },
    BankEntry {
        text: "How can impulse purchases affect your budget?",
        choices: [
            "They help you stay within budget.",
            "They can derail your budget and lead to overspending.",
            "They have no effect on your budget.",
            "They are necessary for financial planning.",
        ],
        correct: 1,
        explanation: "Impulse purchases can lead to unplanned expenses, potentially disrupting your budget and causing overspending.",
    },
    BankEntry {
        text: "What is one strategy to avoid impulse buying?",
        choices: [
            "Always buy on credit.",
            "Wait 24 hours before making non-essential purchases.",
            "Shop online only.",
            "Ignore your budget.",
        ],
        correct: 1,
        explanation: "Waiting 24 hours before making a non-essential purchase allows you to consider whether it is truly needed, reducing impulse buys.",
    },
    BankEntry {
        text: "What does it mean to track your spending?",
        choices: [
            "Recording every dollar spent to understand where money goes.",
            "Only tracking large expenses.",
            "Forgetting about small purchases.",
            "Not keeping any records.",
        ],
        correct: 0,
        explanation: "Tracking spending involves recording all expenses to better understand spending habits and make informed financial decisions.",
    },
    BankEntry {
        text: "What is a budget?",
        choices: [
            "A plan for how to spend and save money.",
            "A way to restrict your spending.",
            "Only a tool for saving.",
            "A plan to spend without limits.",
        ],
        correct: 0,
        explanation: "A budget is a detailed plan that outlines how to allocate income for spending and savings.",
    },
    BankEntry {
        text: "Which of these is an example of discretionary spending?",
        choices: [
            "Rent",
            "Utilities",
            "Groceries",
            "Dining out",
        ],
        correct: 3,
        explanation: "Dining out is considered discretionary spending as it is non-essential, unlike rent and utilities.",
    },
    BankEntry {
        text: "How can setting spending limits help you?",
        choices: [
            "It allows for unlimited spending.",
            "It helps manage finances and prevent overspending.",
            "It has no impact on your financial health.",
            "It encourages higher spending.",
        ],
        correct: 1,
        explanation: "Setting spending limits helps you manage your finances more effectively and avoid overspending.",
    },
];
