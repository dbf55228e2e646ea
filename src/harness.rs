pub mod harness {
    use crate::other_list::{DoublyLinkedList, ListError};
    use std::env;
    use std::io::{self, Write};
    use std::process;
    use thiserror::Error;

    // 错误定义
    #[derive(Debug, Error)]
    pub enum HarnessError {
        #[error("检查失败: {0}")]
        CheckFailed(String),
        #[error("链表不变量被破坏: {0}")]
        BrokenInvariant(#[from] ListError),
    }

    /// 失败处理模式
    ///
    /// - `Abort`: 任何检查失败立即中止进程
    /// - `Report`: 记录失败并继续，最终以非零退出码结束
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FailureMode {
        Abort,
        Report,
    }

    impl FailureMode {
        /// 解析失败处理模式的文本取值（不区分大小写）
        pub fn parse(value: &str) -> Option<Self> {
            match value.to_lowercase().as_str() {
                "abort" => Some(FailureMode::Abort),
                "report" => Some(FailureMode::Report),
                _ => None,
            }
        }

        /// 从环境变量 `DLL_FAILURE_MODE` 读取失败处理模式
        ///
        /// # 返回值
        /// - `abort` / `report`（不区分大小写）对应各自模式
        /// - 未设置或取值无法识别时返回 `None`
        pub fn from_env() -> Option<Self> {
            env::var("DLL_FAILURE_MODE")
                .ok()
                .and_then(|value| Self::parse(&value))
        }
    }

    fn ensure(cond: bool, what: &str) -> Result<(), HarnessError> {
        if cond {
            Ok(())
        } else {
            Err(HarnessError::CheckFailed(what.to_owned()))
        }
    }

    /// 校验非空链表的两端形态
    ///
    /// 要求 `first` 存在、没有前驱且持有值，`last` 存在、没有后继且
    /// 持有值，然后做一次完整的结构校验。
    pub fn check_non_empty_invariants(list: &DoublyLinkedList) -> Result<(), HarnessError> {
        let first = match list.first() {
            Some(first) => first,
            None => return Err(HarnessError::CheckFailed("first 缺失".to_owned())),
        };
        ensure(list.prev_of(first).is_none(), "first 不应有前驱")?;
        ensure(list.value(first).is_some(), "first 应持有值")?;

        let last = match list.last() {
            Some(last) => last,
            None => return Err(HarnessError::CheckFailed("last 缺失".to_owned())),
        };
        ensure(list.next_of(last).is_none(), "last 不应有后继")?;
        ensure(list.value(last).is_some(), "last 应持有值")?;

        list.check_invariants()?;
        Ok(())
    }

    /// 场景一：空链表
    ///
    /// 创建后两端均缺失，随后整体销毁，全程不得中止。
    pub fn check_empty() -> Result<(), HarnessError> {
        let list = DoublyLinkedList::new();
        ensure(list.first().is_none(), "空链表的 first 应缺失")?;
        ensure(list.last().is_none(), "空链表的 last 应缺失")?;
        list.check_invariants()?;
        Ok(())
    }

    /// 场景二：单元素链表
    ///
    /// 追加 "one" 后首尾指向同一节点且值正确。
    pub fn check_one_element() -> Result<(), HarnessError> {
        let mut list = DoublyLinkedList::new();
        let value = "one";
        list.append_value(value)?;
        check_non_empty_invariants(&list)?;
        ensure(list.first() == list.last(), "单元素链表应满足 first == last")?;
        let first = list.first().ok_or_else(|| {
            HarnessError::CheckFailed("first 缺失".to_owned())
        })?;
        ensure(list.value(first) == Some(value), "first 的值应为 \"one\"")?;
        Ok(())
    }

    /// 场景三：双元素链表
    ///
    /// 追加 "one"、"two" 后两端相邻互指、值按序排列；移除尾节点后
    /// 退化为值为 "one" 的单元素链表。
    pub fn check_two_elements() -> Result<(), HarnessError> {
        let mut list = DoublyLinkedList::new();
        let one = "one";
        let two = "two";
        list.append_value(one)?;
        list.append_value(two)?;
        check_non_empty_invariants(&list)?;

        let first = list.first().ok_or_else(|| {
            HarnessError::CheckFailed("first 缺失".to_owned())
        })?;
        let last = list.last().ok_or_else(|| {
            HarnessError::CheckFailed("last 缺失".to_owned())
        })?;
        ensure(list.next_of(first) == Some(last), "first.next 应为 last")?;
        ensure(list.prev_of(last) == Some(first), "last.prev 应为 first")?;
        ensure(list.value(first) == Some(one), "first 的值应为 \"one\"")?;
        ensure(list.value(last) == Some(two), "last 的值应为 \"two\"")?;

        list.remove_last();
        check_non_empty_invariants(&list)?;
        ensure(list.first() == list.last(), "移除后应满足 first == last")?;
        let first = list.first().ok_or_else(|| {
            HarnessError::CheckFailed("first 缺失".to_owned())
        })?;
        ensure(list.value(first) == Some(one), "剩余节点的值应为 \"one\"")?;
        Ok(())
    }

    /// 场景四：多元素链表
    ///
    /// 追加四个值后校验索引访问、线性查找与两端句柄的一致性，
    /// 以及查找缺失值返回缺失。
    pub fn check_multiple_elements() -> Result<(), HarnessError> {
        let values = ["one", "two", "three", "four"];
        let mut list = DoublyLinkedList::new();
        for value in values {
            list.append_value(value)?;
        }
        check_non_empty_invariants(&list)?;

        ensure(list.nth_from_first(0) == list.first(), "第 0 个节点应为 first")?;
        ensure(list.nth_from_first(3) == list.last(), "第 3 个节点应为 last")?;
        for (i, value) in values.iter().enumerate() {
            let nth = list.nth_from_first(i).ok_or_else(|| {
                HarnessError::CheckFailed(format!("第 {} 个节点缺失", i))
            })?;
            ensure(
                list.value(nth) == Some(*value),
                &format!("第 {} 个节点的值应为 {:?}", i, value),
            )?;
            ensure(
                list.find_by_value(value) == Some(nth),
                &format!("查找 {:?} 应命中第 {} 个节点", value, i),
            )?;
        }
        ensure(list.nth_from_first(4).is_none(), "越过末尾的访问应缺失")?;
        ensure(list.find_by_value("five").is_none(), "查找 \"five\" 应缺失")?;
        ensure(list.find_by_value("zero").is_none(), "查找 \"zero\" 应缺失")?;
        Ok(())
    }

    /// 场景表：按固定顺序执行
    pub const SCENARIOS: [(&str, fn() -> Result<(), HarnessError>); 4] = [
        ("test_empty()", check_empty),
        ("test_one_elt()", check_one_element),
        ("test_two_elt()", check_two_elements),
        ("test_multiple_elt()", check_multiple_elements),
    ];

    /// 按固定顺序运行全部场景
    ///
    /// # 参数
    /// - `mode`: 失败处理模式
    ///
    /// # 返回值
    /// 返回进程退出码：全部通过为 0，`Report` 模式下有失败为 1。
    /// `Abort` 模式下任何失败会在检测点立即中止进程，不会返回。
    ///
    /// # 输出
    /// 每个场景在标准输出打印 `Checking <名称>: `，成功后接 `good`；
    /// `Report` 模式下失败打印 `FAILED` 并记录错误日志。
    pub fn run_all(mode: FailureMode) -> i32 {
        let mut failures = 0;
        for (name, scenario) in SCENARIOS {
            print!("Checking {}: ", name);
            let _ = io::stdout().flush();
            log::debug!("开始执行场景 {}", name);
            match scenario() {
                Ok(()) => {
                    println!("good");
                    log::debug!("场景 {} 通过", name);
                }
                Err(err) => match mode {
                    FailureMode::Abort => {
                        println!();
                        eprintln!("{}: {}", name, err);
                        process::abort();
                    }
                    FailureMode::Report => {
                        println!("FAILED");
                        log::error!("场景 {} 失败: {}", name, err);
                        failures += 1;
                    }
                },
            }
        }
        if failures == 0 { 0 } else { 1 }
    }

    // 测试代码
    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn every_scenario_passes() {
            for (name, scenario) in SCENARIOS {
                scenario().unwrap_or_else(|err| panic!("{} 失败: {}", name, err));
            }
        }

        #[test]
        fn run_all_in_report_mode_exits_zero() {
            assert_eq!(run_all(FailureMode::Report), 0);
        }

        #[test]
        fn non_empty_check_rejects_empty_list() {
            let list = DoublyLinkedList::new();
            assert!(check_non_empty_invariants(&list).is_err());
        }

        #[test]
        fn non_empty_check_accepts_filled_list() {
            let mut list = DoublyLinkedList::new();
            list.append_value("one").unwrap();
            list.append_value("two").unwrap();
            check_non_empty_invariants(&list).unwrap();
        }

        #[test]
        fn failure_mode_parses_known_values() {
            assert_eq!(FailureMode::parse("abort"), Some(FailureMode::Abort));
            assert_eq!(FailureMode::parse("Report"), Some(FailureMode::Report));
            assert_eq!(FailureMode::parse("REPORT"), Some(FailureMode::Report));
            assert!(FailureMode::parse("quiet").is_none());
            assert!(FailureMode::parse("").is_none());
        }
    }
}
